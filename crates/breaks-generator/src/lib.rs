//! Class break computation
//!
//! Turns a numeric sample into an ascending sequence of class boundaries
//! suitable for histogram binning or choropleth classification.
//!
//! # Methods
//!
//! | Identifier | Breaks | Class count |
//! |------------|--------|-------------|
//! | `sd`, `equal`, `quantile`, `fisher-jenks` | from the [`ClassificationProvider`] | used |
//! | `geom` | geometric progression, needs a positive minimum | used |
//! | `arith` | arithmetic progression | used |
//! | `q6` | quantiles at 0, 5, 27.5, 50, 72.5, 95 and 100% | ignored |
//! | `em` | nested means | must be a power of 2 |
//! | `msd` | bands of `k` standard deviations around the mean | ignored |
//!
//! Without an explicit class count the generator uses
//! `1 + 3.3 * log10(n)` truncated to an integer, so 100 values give 7 classes.
//!
//! # Examples
//!
//! ## One-off Computation
//!
//! ```rust
//! use breaks_generator::{compute_breaks, Method};
//!
//! let data = vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
//! let breaks = compute_breaks(&data, Some(3), Method::Geom, 1.0, false).unwrap();
//! assert_eq!(breaks.len(), 4);
//! assert_eq!(breaks[0], 1.0);
//! assert_eq!(breaks[3], 64.0);
//! ```
//!
//! ## Reusing a Generator
//!
//! ```rust
//! use breaks_generator::{BreakGenerator, BreakParams, BundledProvider, Method};
//!
//! let generator = BreakGenerator::new(BundledProvider);
//! let params = BreakParams::new(Method::Msd).with_k(1.0).with_middle(true);
//!
//! let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
//! let breaks = generator.compute(&data, &params).unwrap();
//! for (lower, upper) in breaks.intervals() {
//!     println!("[{lower:.2}, {upper:.2}]");
//! }
//! ```

pub mod algorithms;
pub mod break_set;
pub mod generator;
pub mod method;
pub mod params;

// Re-export main types
pub use break_set::BreakSet;
pub use generator::{compute_breaks, BreakGenerator};
pub use method::Method;
pub use params::BreakParams;

pub use breaks_classify::{BundledProvider, ClassStyle, ClassificationProvider};
pub use breaks_core::{Error, Result, Sample};
