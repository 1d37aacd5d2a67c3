//! Error types for class break computation
//!
//! Provides a unified error type for all class-breaks crates.

use thiserror::Error;

/// Core error type for class break operations
#[derive(Error, Debug)]
pub enum Error {
    /// No values remain once missing entries are removed
    #[error("Empty sample: no values left after removing missing entries")]
    EmptySample,

    /// Method identifier outside the recognized set
    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    /// Class count rejected by the requested method
    #[error("Invalid class count {count}: {reason}")]
    InvalidClassCount { count: usize, reason: &'static str },

    /// A method-specific mathematical precondition does not hold
    #[error("Domain error: {0}")]
    Domain(String),

    /// Failure raised by a third-party classification provider
    #[error("Provider error: {0}")]
    Provider(#[from] anyhow::Error),
}

/// Largest class count any method accepts
///
/// Every method materializes `class_count + 1` breaks (Fisher-Jenks a
/// `class_count x n` matrix), so larger requests are refused up front.
pub const MAX_CLASS_COUNT: usize = 1 << 20;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a domain error with context
    pub fn domain(context: impl Into<String>) -> Self {
        Self::Domain(context.into())
    }

    /// Create an error for a zero class count
    pub fn zero_class_count() -> Self {
        Self::InvalidClassCount {
            count: 0,
            reason: "class count must be positive",
        }
    }

    /// Create an error for a class count that is not a power of two
    pub fn not_power_of_two(count: usize) -> Self {
        Self::InvalidClassCount {
            count,
            reason: "class count must be a power of 2",
        }
    }

    /// Create an error for a class count above [`MAX_CLASS_COUNT`]
    pub fn too_many_classes(count: usize) -> Self {
        Self::InvalidClassCount {
            count,
            reason: "class count exceeds the supported maximum",
        }
    }

    /// Create an error for infinite values
    pub fn non_finite(context: &str) -> Self {
        Self::Domain(format!("{context} contains infinite values"))
    }

    /// Check that a class count is positive and within [`MAX_CLASS_COUNT`]
    pub fn check_class_count(count: usize) -> Result<()> {
        if count == 0 {
            return Err(Self::zero_class_count());
        }
        if count > MAX_CLASS_COUNT {
            return Err(Self::too_many_classes(count));
        }
        Ok(())
    }
}
