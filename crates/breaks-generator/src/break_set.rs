//! The finalized break sequence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ascending sequence of class boundaries
///
/// Adjacent breaks delimit one class, so `n` breaks describe `n - 1`
/// classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakSet {
    breaks: Vec<f64>,
}

impl BreakSet {
    /// Wrap breaks that are already sorted ascending
    pub fn new(breaks: Vec<f64>) -> Self {
        debug_assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
        Self { breaks }
    }

    /// Breaks as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.breaks
    }

    /// Unwrap into the underlying vector
    pub fn into_vec(self) -> Vec<f64> {
        self.breaks
    }

    /// Number of breaks
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Check if there are no breaks
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Number of classes the breaks delimit
    pub fn class_count(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }

    /// Lowest break
    pub fn min(&self) -> Option<f64> {
        self.breaks.first().copied()
    }

    /// Highest break
    pub fn max(&self) -> Option<f64> {
        self.breaks.last().copied()
    }

    /// `(lower, upper)` bounds of each class
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.breaks.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<BreakSet> for Vec<f64> {
    fn from(set: BreakSet) -> Self {
        set.breaks
    }
}

impl AsRef<[f64]> for BreakSet {
    fn as_ref(&self) -> &[f64] {
        &self.breaks
    }
}

impl fmt::Display for BreakSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => write!(
                f,
                "BreakSet({} classes, range=[{:.3}, {:.3}])",
                self.class_count(),
                min,
                max
            ),
            _ => write!(f, "BreakSet(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let set = BreakSet::new(vec![0.0, 1.5, 4.0]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.class_count(), 2);
        assert_eq!(set.min(), Some(0.0));
        assert_eq!(set.max(), Some(4.0));
        assert_eq!(set.intervals().collect::<Vec<_>>(), vec![(0.0, 1.5), (1.5, 4.0)]);
        assert_eq!(set.to_string(), "BreakSet(2 classes, range=[0.000, 4.000])");
        assert_eq!(Vec::from(set), vec![0.0, 1.5, 4.0]);
    }

    #[test]
    fn test_empty() {
        let set = BreakSet::new(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.class_count(), 0);
        assert_eq!(set.intervals().count(), 0);
        assert_eq!(set.to_string(), "BreakSet(empty)");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let set = BreakSet::new(vec![1.0, 2.0]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1.0,2.0]");
    }
}
