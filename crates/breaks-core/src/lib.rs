//! Core types for class break computation
//!
//! This crate holds the pieces shared by every break algorithm and every
//! classification provider:
//!
//! - [`Error`] and the [`Result`] alias
//! - [`Sample`], the missing-free form of caller data, and the default class
//!   count rule
//! - descriptive statistics ([`stats`]) and type-7 quantiles ([`quantile`])
//!
//! # Example
//!
//! ```rust
//! use breaks_core::{Sample, quantile::quantile_sorted};
//!
//! let sample = Sample::from_raw(&[4.0, f64::NAN, 1.0, 3.0, 2.0]).unwrap();
//! assert_eq!(sample.len(), 4);
//! assert_eq!(sample.resolve_class_count(None).unwrap(), 2);
//!
//! let median = quantile_sorted(&sample.sorted(), 0.5).unwrap();
//! assert_eq!(median, 2.5);
//! ```

pub mod error;
pub mod quantile;
pub mod sample;
pub mod stats;

pub use error::{Error, Result, MAX_CLASS_COUNT};
pub use sample::{default_class_count, Sample};
