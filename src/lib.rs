//! Class breaks
//!
//! Facade over the workspace crates:
//!
//! - [`breaks_core`]: error type, sample normalization and shared statistics
//! - [`breaks_classify`]: the classification provider seam and its bundled
//!   sd/equal/quantile/Fisher-Jenks implementation
//! - [`breaks_generator`]: method dispatch and the built-in break algorithms
//!
//! ```rust
//! use class_breaks::{compute_breaks, Method};
//!
//! let data = [3.0, f64::NAN, 1.0, 9.0, 27.0];
//! let breaks = compute_breaks(&data, Some(3), Method::Geom, 1.0, false).unwrap();
//! assert_eq!(breaks.first(), Some(&1.0));
//! assert_eq!(breaks.last(), Some(&27.0));
//! ```

pub use breaks_classify;
pub use breaks_core;
pub use breaks_generator;

pub use breaks_generator::{
    compute_breaks, BreakGenerator, BreakParams, BreakSet, BundledProvider, ClassStyle,
    ClassificationProvider, Error, Method, Result, Sample,
};
