//! Sample normalization
//!
//! A [`Sample`] is the dense, missing-free form of a caller's data. Missing
//! entries (`NaN` in a plain slice, `None` in an optional slice) are dropped;
//! infinite values are rejected because no break algorithm has a meaningful
//! answer for them.

use crate::stats::{min_max, sorted};
use crate::{Error, Result};
use tracing::debug;

/// Cleaned sample with its extremes precomputed
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl Sample {
    /// Build a sample from raw values, treating `NaN` as missing
    pub fn from_raw(raw: &[f64]) -> Result<Self> {
        Self::from_values(raw.iter().copied().filter(|v| !v.is_nan()).collect(), raw.len())
    }

    /// Build a sample from optional values, treating `None` and `NaN` as missing
    pub fn from_options(raw: &[Option<f64>]) -> Result<Self> {
        Self::from_values(
            raw.iter().flatten().copied().filter(|v| !v.is_nan()).collect(),
            raw.len(),
        )
    }

    fn from_values(values: Vec<f64>, raw_len: usize) -> Result<Self> {
        if values.iter().any(|v| v.is_infinite()) {
            return Err(Error::non_finite("sample"));
        }
        let (min, max) = min_max(&values).ok_or(Error::EmptySample)?;
        if values.len() < raw_len {
            debug!(removed = raw_len - values.len(), kept = values.len(), "dropped missing values");
        }
        Ok(Self { values, min, max })
    }

    /// Values in their original order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (never zero)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Range `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Sorted copy of the values
    pub fn sorted(&self) -> Vec<f64> {
        sorted(&self.values)
    }

    /// Class count from the caller, or the Sturges-like default for this sample
    pub fn resolve_class_count(&self, requested: Option<usize>) -> Result<usize> {
        match requested {
            Some(count) => {
                Error::check_class_count(count)?;
                Ok(count)
            }
            None => {
                let count = default_class_count(self.len());
                debug!(n = self.len(), count, "derived default class count");
                Ok(count)
            }
        }
    }
}

/// Default class count for `n` observations, at least 1
///
/// Sturges-like rule `1 + 3.3 * log10(n)`, truncated toward zero so that
/// 100 observations give 7 classes. This departs from rounding whenever the
/// fractional part is at least 0.5: 1000 observations give 10 classes, not
/// 11.
pub fn default_class_count(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let count = (1.0 + 3.3 * (n as f64).log10()).trunc();
    (count as usize).max(1)
}
