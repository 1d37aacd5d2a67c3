//! Property tests for the shared statistics helpers

use breaks_core::quantile::quantile_sorted;
use breaks_core::stats::{min_max, sorted};
use breaks_core::Sample;
use proptest::prelude::*;

proptest! {
    // Quantiles never decrease as the probability grows
    #[test]
    fn prop_quantiles_monotone(
        data in prop::collection::vec(-1.0e6..1.0e6f64, 1..200),
        p1 in 0.0..=1.0f64,
        p2 in 0.0..=1.0f64,
    ) {
        let data = sorted(&data);
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let q_lo = quantile_sorted(&data, lo).unwrap();
        let q_hi = quantile_sorted(&data, hi).unwrap();
        prop_assert!(q_lo <= q_hi);
    }

    // Quantiles stay within the sample extremes
    #[test]
    fn prop_quantiles_bounded(
        data in prop::collection::vec(-1.0e6..1.0e6f64, 1..200),
        p in 0.0..=1.0f64,
    ) {
        let data = sorted(&data);
        let (min, max) = min_max(&data).unwrap();
        let q = quantile_sorted(&data, p).unwrap();
        prop_assert!(q >= min && q <= max);
    }

    // Missing values never change the extremes of what remains
    #[test]
    fn prop_sample_ignores_missing(
        data in prop::collection::vec(prop::option::of(-1.0e3..1.0e3f64), 1..100),
    ) {
        let present: Vec<f64> = data.iter().flatten().copied().collect();
        match Sample::from_options(&data) {
            Ok(sample) => {
                prop_assert_eq!(sample.len(), present.len());
                prop_assert_eq!(Some((sample.min(), sample.max())), min_max(&present));
            }
            Err(_) => prop_assert!(present.is_empty()),
        }
    }
}
