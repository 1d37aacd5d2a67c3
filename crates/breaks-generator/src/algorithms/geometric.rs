//! Geometric progression breaks

use super::finalize;
use breaks_core::{Error, Result, Sample};
use tracing::debug;

/// Breaks forming a geometric progression from the minimum to the maximum
///
/// The common ratio is `exp((ln max - ln min) / class_count)`; each interior
/// break is the previous one times the ratio. Requires a strictly positive
/// minimum.
pub fn geometric_breaks(sample: &Sample, class_count: usize) -> Result<Vec<f64>> {
    Error::check_class_count(class_count)?;
    let (min, max) = (sample.min(), sample.max());
    if min <= 0.0 {
        return Err(Error::domain(format!(
            "geometric progression needs a strictly positive minimum, got {min}"
        )));
    }

    let ratio = ((max.ln() - min.ln()) / class_count as f64).exp();
    debug!(ratio, class_count, "geometric ratio");

    let mut breaks = Vec::with_capacity(class_count.saturating_add(1));
    breaks.push(min);
    breaks.push(max);
    let mut current = min;
    for _ in 1..class_count {
        current *= ratio;
        // rounding in exp/ln must not push an interior break past max
        breaks.push(current.min(max));
    }
    Ok(finalize(breaks))
}
