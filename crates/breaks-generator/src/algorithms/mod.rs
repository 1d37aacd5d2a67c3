//! Built-in break algorithms
//!
//! Each algorithm is a pure function of a cleaned [`Sample`](breaks_core::Sample)
//! returning breaks that are already finalized (sorted ascending, framed by
//! the sample extremes).

pub mod arithmetic;
pub mod geometric;
pub mod msd;
pub mod nested_means;
pub mod q6;

pub use arithmetic::arithmetic_breaks;
pub use geometric::geometric_breaks;
pub use msd::msd_breaks;
pub use nested_means::nested_means_breaks;
pub use q6::{q6_breaks, Q6_PROBABILITIES};

use breaks_core::stats::sort_ascending;

/// Sort candidate breaks ascending
pub(crate) fn finalize(mut breaks: Vec<f64>) -> Vec<f64> {
    sort_ascending(&mut breaks);
    breaks
}

/// Sort candidate breaks ascending and drop repeated values
pub(crate) fn finalize_unique(breaks: Vec<f64>) -> Vec<f64> {
    let mut breaks = finalize(breaks);
    breaks.dedup();
    breaks
}
