//! The bundled classification provider

use crate::builders::{EqualIntervalBuilder, QuantileBuilder, StdDevBuilder};
use crate::fisher::FisherJenksBuilder;
use crate::traits::{ClassBuilder, ClassificationProvider};
use crate::types::ClassStyle;
use breaks_core::stats::sorted;
use breaks_core::{Error, Result};
use tracing::{debug, instrument};

/// Classification provider backed by the builders in this crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundledProvider;

impl BundledProvider {
    /// Create the bundled provider
    pub fn new() -> Self {
        Self
    }

    fn builder(style: ClassStyle, class_count: usize) -> Box<dyn ClassBuilder> {
        match style {
            ClassStyle::Sd => Box::new(StdDevBuilder::new(class_count)),
            ClassStyle::Equal => Box::new(EqualIntervalBuilder::new(class_count)),
            ClassStyle::Quantile => Box::new(QuantileBuilder::new(class_count)),
            ClassStyle::Fisher => Box::new(FisherJenksBuilder::new(class_count)),
        }
    }
}

impl ClassificationProvider for BundledProvider {
    #[instrument(skip(self, sample, style), fields(n = sample.len(), style = %style))]
    fn classify(&self, sample: &[f64], class_count: usize, style: ClassStyle) -> Result<Vec<f64>> {
        if sample.is_empty() {
            return Err(Error::EmptySample);
        }
        Error::check_class_count(class_count)?;

        let breaks = Self::builder(style, class_count).build_sorted(&sorted(sample))?;
        debug!(breaks = breaks.len(), "classified");
        Ok(breaks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_spans_the_sample() {
        let data: Vec<f64> = (1..=50).map(|x| (x as f64).sqrt()).collect();
        let provider = BundledProvider::new();

        for style in ClassStyle::ALL {
            let breaks = provider.classify(&data, 5, style).unwrap();
            assert_eq!(breaks.first(), Some(&1.0), "style {style}");
            assert_eq!(breaks.last(), Some(&50f64.sqrt()), "style {style}");
            assert!(breaks.windows(2).all(|w| w[0] < w[1]), "style {style}");
        }
    }

    #[test]
    fn test_unsorted_input() {
        let breaks = BundledProvider
            .classify(&[9.0, 1.0, 5.0, 3.0, 7.0], 2, ClassStyle::Equal)
            .unwrap();
        assert_eq!(breaks, vec![1.0, 5.0, 9.0]);
    }

    #[test]
    fn test_rejects_bad_requests() {
        assert!(matches!(
            BundledProvider.classify(&[], 3, ClassStyle::Quantile),
            Err(Error::EmptySample)
        ));
        assert!(matches!(
            BundledProvider.classify(&[1.0, 2.0], 0, ClassStyle::Fisher),
            Err(Error::InvalidClassCount { count: 0, .. })
        ));
    }
}
