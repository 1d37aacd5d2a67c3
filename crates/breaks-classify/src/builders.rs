//! Break builders for the equal, sd and quantile styles

use crate::traits::ClassBuilder;
use breaks_core::quantile::quantiles_sorted;
use breaks_core::stats::{mean, population_std_dev};
use breaks_core::{Error, Result};

/// Frame interior breaks with the sample extremes, sort and deduplicate
pub(crate) fn frame_breaks(min: f64, max: f64, interior: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut breaks = vec![min];
    breaks.extend(interior);
    breaks.push(max);
    breaks_core::stats::sort_ascending(&mut breaks);
    breaks.dedup();
    breaks
}

pub(crate) fn extremes(sorted_sample: &[f64]) -> Result<(f64, f64)> {
    match (sorted_sample.first(), sorted_sample.last()) {
        (Some(&min), Some(&max)) => Ok((min, max)),
        _ => Err(Error::EmptySample),
    }
}

/// Equal-interval builder
///
/// Splits `[min, max]` into classes of identical width.
pub struct EqualIntervalBuilder {
    num_classes: usize,
}

impl EqualIntervalBuilder {
    /// Create a new equal-interval builder
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }
}

impl ClassBuilder for EqualIntervalBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        Error::check_class_count(self.num_classes)?;
        let (min, max) = extremes(sorted_sample)?;

        let width = (max - min) / self.num_classes as f64;
        // Last edge is max itself, not min + k * width
        Ok(frame_breaks(
            min,
            max,
            (1..self.num_classes).map(|i| min + i as f64 * width),
        ))
    }
}

/// Standard-deviation builder
///
/// Places breaks one population standard deviation apart, centred on the
/// mean: `mean + (i - k/2) * sd` for `i` in `1..k`. Breaks that would fall
/// outside the sample are clamped to its extremes, so wide bands on a narrow
/// sample yield fewer than `k + 1` breaks.
pub struct StdDevBuilder {
    num_classes: usize,
}

impl StdDevBuilder {
    /// Create a new standard-deviation builder
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }
}

impl ClassBuilder for StdDevBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        Error::check_class_count(self.num_classes)?;
        let (min, max) = extremes(sorted_sample)?;

        let avg = mean(sorted_sample);
        let sd = population_std_dev(sorted_sample);
        if sd <= 0.0 {
            return Ok(frame_breaks(min, max, std::iter::empty()));
        }

        let half = self.num_classes as f64 / 2.0;
        Ok(frame_breaks(
            min,
            max,
            (1..self.num_classes).map(|i| (avg + (i as f64 - half) * sd).clamp(min, max)),
        ))
    }
}

/// Quantile builder
///
/// Places breaks at the type-7 quantiles `i / k`, so each class holds
/// roughly the same share of the sample. Tied quantiles collapse into one
/// break.
pub struct QuantileBuilder {
    num_classes: usize,
}

impl QuantileBuilder {
    /// Create a new quantile builder
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }
}

impl ClassBuilder for QuantileBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        Error::check_class_count(self.num_classes)?;
        if sorted_sample.is_empty() {
            return Err(Error::EmptySample);
        }

        let probabilities: Vec<f64> = (0..=self.num_classes)
            .map(|i| i as f64 / self.num_classes as f64)
            .collect();
        let mut breaks = quantiles_sorted(sorted_sample, &probabilities)?;
        breaks.dedup();
        Ok(breaks)
    }
}
