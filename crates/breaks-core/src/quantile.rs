//! Linear-interpolation sample quantiles
//!
//! Implements the "type 7" definition (the default in R and NumPy): for
//! probability `p` over `n` sorted values the fractional index is
//! `h = (n - 1) * p` and the estimate interpolates between `x[floor(h)]` and
//! `x[floor(h) + 1]`. `p = 0` and `p = 1` return the sample extremes exactly.

use crate::{Error, Result};
use num_traits::{Float, NumCast, ToPrimitive};

/// Type-7 quantile of already sorted data
pub fn quantile_sorted<T: Float>(sorted: &[T], p: f64) -> Result<T> {
    if sorted.is_empty() {
        return Err(Error::EmptySample);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::domain(format!("Quantile {p} must be in [0, 1]")));
    }

    let last = sorted.len() - 1;
    let h = last as f64 * p;
    let lo = h.floor().to_usize().unwrap_or(0).min(last);
    let hi = (lo + 1).min(last);
    let frac: T = <T as NumCast>::from(h - lo as f64)
        .ok_or_else(|| Error::domain("quantile fraction is not representable"))?;

    if frac.is_zero() {
        return Ok(sorted[lo]);
    }
    // keep the estimate inside its bracket despite rounding
    let estimate = sorted[lo] + frac * (sorted[hi] - sorted[lo]);
    Ok(estimate.max(sorted[lo]).min(sorted[hi]))
}

/// Type-7 quantiles of already sorted data at several probabilities
pub fn quantiles_sorted<T: Float>(sorted: &[T], probabilities: &[f64]) -> Result<Vec<T>> {
    probabilities
        .iter()
        .map(|&p| quantile_sorted(sorted, p))
        .collect()
}
