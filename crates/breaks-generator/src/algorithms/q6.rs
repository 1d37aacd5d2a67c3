//! Fixed-probability quantile breaks

use breaks_core::quantile::quantiles_sorted;
use breaks_core::{Result, Sample};

/// Probabilities of the seven q6 breaks
pub const Q6_PROBABILITIES: [f64; 7] = [0.0, 0.05, 0.275, 0.5, 0.725, 0.95, 1.0];

/// Type-7 sample quantiles at [`Q6_PROBABILITIES`]
///
/// Always returns seven breaks, whatever class count the caller asked for.
pub fn q6_breaks(sample: &Sample) -> Result<Vec<f64>> {
    quantiles_sorted(&sample.sorted(), &Q6_PROBABILITIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_to_twenty_one() {
        // n - 1 = 20, so h = 20 * p
        let data: Vec<f64> = (1..=21).map(|x| x as f64).collect();
        let breaks = q6_breaks(&Sample::from_raw(&data).unwrap()).unwrap();
        let expected = [1.0, 2.0, 6.5, 11.0, 15.5, 20.0, 21.0];
        assert_eq!(breaks.len(), 7);
        for (b, e) in breaks.iter().zip(expected) {
            assert_relative_eq!(*b, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_small_sample_repeats_values() {
        let breaks = q6_breaks(&Sample::from_raw(&[3.0, 1.0]).unwrap()).unwrap();
        assert_eq!(breaks.len(), 7);
        assert_eq!(breaks[0], 1.0);
        assert_eq!(breaks[6], 3.0);
        assert!(breaks.windows(2).all(|w| w[0] <= w[1]));
    }
}
