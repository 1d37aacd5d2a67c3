//! Descriptive statistics used by the break algorithms

use num_traits::Float;
use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;

/// Smallest and largest value of a slice, or `None` when it is empty
pub fn min_max<T: Float>(data: &[T]) -> Option<(T, T)> {
    let first = *data.first()?;
    Some(data.iter().fold((first, first), |(lo, hi), &x| {
        (if x < lo { x } else { lo }, if x > hi { x } else { hi })
    }))
}

/// Arithmetic mean (NaN for an empty slice)
pub fn mean(data: &[f64]) -> f64 {
    data.iter().mean()
}

/// Population standard deviation (divisor n, not n - 1)
pub fn population_std_dev(data: &[f64]) -> f64 {
    data.iter().population_std_dev()
}

/// Sort in place, ascending
///
/// Inputs are expected to be NaN-free; NaN would sort after every number.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by_key(|&v| OrderedFloat(v));
}

/// Sorted copy of the input
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    sort_ascending(&mut out);
    out
}
