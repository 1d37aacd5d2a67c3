//! Core traits for classification

use crate::types::ClassStyle;
use breaks_core::stats::sorted;
use breaks_core::Result;
use std::sync::Arc;

/// Trait for computing class breaks in one fixed style
pub trait ClassBuilder {
    /// Compute breaks from pre-sorted data
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Vec<f64>>;

    /// Compute breaks from unsorted data
    ///
    /// Default implementation sorts a copy and calls build_sorted().
    fn build(&self, sample: &[f64]) -> Result<Vec<f64>> {
        self.build_sorted(&sorted(sample))
    }
}

/// Source of breaks for the standard classification styles
///
/// Implementations must return ascending, deduplicated, finite breaks
/// spanning the sample's minimum and maximum, at most `class_count + 1` of
/// them. Styles that clamp to the sample range (such as `sd` on a narrow
/// sample) or collapse ties may return fewer. Implementations are shared
/// across threads.
pub trait ClassificationProvider: Send + Sync {
    /// Classify `sample` into `class_count` classes using `style`
    fn classify(&self, sample: &[f64], class_count: usize, style: ClassStyle) -> Result<Vec<f64>>;
}

impl<P: ClassificationProvider + ?Sized> ClassificationProvider for &P {
    fn classify(&self, sample: &[f64], class_count: usize, style: ClassStyle) -> Result<Vec<f64>> {
        (**self).classify(sample, class_count, style)
    }
}

impl<P: ClassificationProvider + ?Sized> ClassificationProvider for Box<P> {
    fn classify(&self, sample: &[f64], class_count: usize, style: ClassStyle) -> Result<Vec<f64>> {
        (**self).classify(sample, class_count, style)
    }
}

impl<P: ClassificationProvider + ?Sized> ClassificationProvider for Arc<P> {
    fn classify(&self, sample: &[f64], class_count: usize, style: ClassStyle) -> Result<Vec<f64>> {
        (**self).classify(sample, class_count, style)
    }
}
