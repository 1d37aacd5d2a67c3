//! Arithmetic progression breaks

use super::finalize;
use breaks_core::{Error, Result, Sample};
use tracing::debug;

/// Breaks stepping up from the minimum by `range / (1 + 2 + ... + class_count)`
///
/// Interior breaks are `min + i * step` for `i` in `1..class_count`, and the
/// last class absorbs whatever remains up to the maximum. The triangular
/// divisor makes every interior class narrower than `range / class_count`.
pub fn arithmetic_breaks(sample: &Sample, class_count: usize) -> Result<Vec<f64>> {
    Error::check_class_count(class_count)?;
    let (min, max) = (sample.min(), sample.max());

    // float arithmetic so huge class counts cannot overflow
    let n = class_count as f64;
    let triangular = n * (n + 1.0) / 2.0;
    let step = (max - min) / triangular;
    debug!(step, class_count, "arithmetic step");

    let mut breaks = Vec::with_capacity(class_count.saturating_add(1));
    breaks.push(min);
    breaks.push(max);
    let mut current = min;
    for _ in 1..class_count {
        current += step;
        breaks.push(current);
    }
    Ok(finalize(breaks))
}
