//! Nested means breaks
//!
//! Starting from `[min, max]`, every round splits each class at the mean of
//! the values it holds, doubling the class count. `log2(class_count)` rounds
//! yield `class_count` classes. The first class is closed on both ends, the
//! others are open on the left: `[b0, b1], (b1, b2], ...`.

use super::finalize;
use breaks_core::stats::{mean, sort_ascending};
use breaks_core::{Error, Result, Sample};
use tracing::debug;

/// Sorted values lying in the `index`-th class bounded by `lower` and `upper`
fn class_members(sorted: &[f64], index: usize, lower: f64, upper: f64) -> &[f64] {
    let start = if index == 0 {
        sorted.partition_point(|&x| x < lower)
    } else {
        sorted.partition_point(|&x| x <= lower)
    };
    let end = sorted.partition_point(|&x| x <= upper).max(start);
    &sorted[start..end]
}

/// Nested means breaks; `class_count` must be a power of two
///
/// A class holding no values (only possible with heavy ties) is not split,
/// so such samples can return fewer than `class_count + 1` breaks.
pub fn nested_means_breaks(sample: &Sample, class_count: usize) -> Result<Vec<f64>> {
    Error::check_class_count(class_count)?;
    if !class_count.is_power_of_two() {
        return Err(Error::not_power_of_two(class_count));
    }

    let sorted = sample.sorted();
    let mut bounds = vec![sample.min(), sample.max()];

    for round in 0..class_count.trailing_zeros() {
        let mut means = Vec::with_capacity(bounds.len() - 1);
        for (index, pair) in bounds.windows(2).enumerate() {
            let (lower, upper) = (pair[0], pair[1]);
            let members = class_members(&sorted, index, lower, upper);
            if members.is_empty() {
                debug!(round, lower, upper, "empty class left unsplit");
                continue;
            }
            means.push(mean(members).clamp(lower, upper));
        }
        bounds.extend(means);
        sort_ascending(&mut bounds);
        debug!(round, breaks = bounds.len(), "nested means round");
    }

    Ok(finalize(bounds))
}
