//! Per-call configuration

use crate::method::Method;
use serde::{Deserialize, Serialize};

/// Parameters of one break computation
///
/// Missing JSON fields fall back to [`BreakParams::default`].
///
/// ```rust
/// use breaks_generator::{BreakParams, Method};
///
/// let params = BreakParams::from_json(r#"{ "method": "msd", "k": 0.5, "middle": true }"#).unwrap();
/// assert_eq!(params, BreakParams::new(Method::Msd).with_k(0.5).with_middle(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakParams {
    /// Break computation method
    pub method: Method,
    /// Number of classes; derived from the sample size when absent
    pub class_count: Option<usize>,
    /// Band width in standard deviations (msd only)
    pub k: f64,
    /// Centre a class on the mean instead of breaking at it (msd only)
    pub middle: bool,
}

impl Default for BreakParams {
    fn default() -> Self {
        Self {
            method: Method::Quantile,
            class_count: None,
            k: 1.0,
            middle: false,
        }
    }
}

impl BreakParams {
    /// Default parameters for `method`
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Set an explicit class count
    pub fn with_class_count(mut self, class_count: usize) -> Self {
        self.class_count = Some(class_count);
        self
    }

    /// Set the msd band width
    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    /// Set the msd centring policy
    pub fn with_middle(mut self, middle: bool) -> Self {
        self.middle = middle;
        self
    }

    /// Parse parameters from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize parameters to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
