//! Standard classification styles for class break computation
//!
//! This crate provides the four "standard" ways of cutting a sample into
//! classes, and the [`ClassificationProvider`] trait through which the break
//! generator asks for them. Any compliant implementation can stand in for
//! the [`BundledProvider`] shipped here.
//!
//! # Key Features
//!
//! - **Equal intervals**: classes of identical width
//! - **Standard deviation bands**: one-sd classes centred on the mean
//! - **Quantiles**: classes holding equal shares of the sample
//! - **Fisher-Jenks**: optimal natural breaks by dynamic programming
//!
//! # Examples
//!
//! ## Using the Provider
//!
//! ```rust
//! use breaks_classify::{BundledProvider, ClassStyle, ClassificationProvider};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let breaks = BundledProvider.classify(&data, 4, ClassStyle::Equal).unwrap();
//! assert_eq!(breaks, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
//! ```
//!
//! ## Using a Builder Directly
//!
//! ```rust
//! use breaks_classify::{ClassBuilder, FisherJenksBuilder};
//!
//! let data = vec![1.0, 1.5, 2.0, 10.0, 10.5, 11.0];
//! let breaks = FisherJenksBuilder::new(2).build(&data).unwrap();
//! assert_eq!(breaks, vec![1.0, 6.0, 11.0]);
//! ```

pub mod builders;
pub mod fisher;
pub mod provider;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{EqualIntervalBuilder, QuantileBuilder, StdDevBuilder};
pub use fisher::FisherJenksBuilder;
pub use provider::BundledProvider;
pub use traits::{ClassBuilder, ClassificationProvider};
pub use types::ClassStyle;

pub use breaks_core::{Error, Result};

// Convenience functions
/// Equal-interval breaks
pub fn equal_breaks(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    EqualIntervalBuilder::new(num_classes).build(data)
}

/// Standard-deviation breaks
pub fn sd_breaks(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    StdDevBuilder::new(num_classes).build(data)
}

/// Quantile breaks
pub fn quantile_breaks(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    QuantileBuilder::new(num_classes).build(data)
}

/// Fisher-Jenks natural breaks
pub fn fisher_breaks(data: &[f64], num_classes: usize) -> Result<Vec<f64>> {
    FisherJenksBuilder::new(num_classes).build(data)
}
