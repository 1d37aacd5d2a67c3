//! Mean and standard deviation banding
//!
//! Classes are `k` population standard deviations wide. With `middle` unset
//! the mean is itself a break and bands run outward from it; with `middle`
//! set the mean sits at the centre of a class whose edges are `mean ± k*sd/2`.
//! Bands are generated until they pass the sample extremes, then only breaks
//! strictly inside `(min, max)` are kept and the extremes are added back.

use super::finalize_unique;
use breaks_core::stats::{mean, population_std_dev};
use breaks_core::{Error, Result, Sample};
use tracing::debug;

/// Number of whole bands needed to cover `distance`, never negative
fn band_count(distance: f64, width: f64) -> usize {
    let bands = (distance / width).ceil();
    if bands > 0.0 {
        bands as usize
    } else {
        0
    }
}

/// Mean/standard-deviation breaks
pub fn msd_breaks(sample: &Sample, k: f64, middle: bool) -> Result<Vec<f64>> {
    if !(k.is_finite() && k > 0.0) {
        return Err(Error::domain(format!("band width k must be positive and finite, got {k}")));
    }

    let values = sample.values();
    let avg = mean(values);
    let sd = population_std_dev(values);
    if sample.range() == 0.0 || !(sd > 0.0) {
        return Err(Error::domain("standard deviation of the sample is zero"));
    }

    let (min, max) = (sample.min(), sample.max());
    let width = sd * k;
    let (upper_anchor, lower_anchor) = if middle {
        (avg + 0.5 * width, avg - 0.5 * width)
    } else {
        (avg, avg)
    };
    let upper_bands = band_count(max - upper_anchor, width);
    let lower_bands = band_count(lower_anchor - min, width);
    debug!(avg, sd, width, upper_bands, lower_bands, middle, "msd bands");

    let upper = (0..=upper_bands).map(|i| upper_anchor + i as f64 * width);
    let lower = (0..=lower_bands).map(|i| lower_anchor - i as f64 * width);

    let mut breaks = vec![min, max];
    breaks.extend(upper.chain(lower).filter(|&b| b > min && b < max));
    Ok(finalize_unique(breaks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn one_to_ten() -> Sample {
        Sample::from_raw(&(1..=10).map(|x| x as f64).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn test_mean_is_a_break() {
        let sd = 8.25f64.sqrt();
        let breaks = msd_breaks(&one_to_ten(), 1.0, false).unwrap();

        assert_eq!(breaks.len(), 5);
        assert_eq!(breaks[0], 1.0);
        assert_relative_eq!(breaks[1], 5.5 - sd, epsilon = 1e-12);
        assert_relative_eq!(breaks[2], 5.5, epsilon = 1e-12);
        assert_relative_eq!(breaks[3], 5.5 + sd, epsilon = 1e-12);
        assert_eq!(breaks[4], 10.0);
    }

    #[test]
    fn test_mean_centres_a_class() {
        let sd = 8.25f64.sqrt();
        let breaks = msd_breaks(&one_to_ten(), 1.0, true).unwrap();

        assert_eq!(breaks.len(), 6);
        assert_relative_eq!(breaks[1], 5.5 - 1.5 * sd, epsilon = 1e-12);
        assert_relative_eq!(breaks[2], 5.5 - 0.5 * sd, epsilon = 1e-12);
        assert_relative_eq!(breaks[3], 5.5 + 0.5 * sd, epsilon = 1e-12);
        assert_relative_eq!(breaks[4], 5.5 + 1.5 * sd, epsilon = 1e-12);
        assert!(breaks.iter().all(|&b| b != 5.5));
    }

    #[test]
    fn test_wide_bands_keep_only_extremes() {
        // A half band of 5 sd passes both extremes of 1..=10
        let breaks = msd_breaks(&one_to_ten(), 10.0, true).unwrap();
        assert_eq!(breaks, vec![1.0, 10.0]);
    }

    #[test]
    fn test_narrow_bands() {
        let breaks = msd_breaks(&one_to_ten(), 0.25, false).unwrap();
        assert_eq!(breaks.first(), Some(&1.0));
        assert_eq!(breaks.last(), Some(&10.0));
        assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        // 4.5 / (0.25 * 2.87) rounds up to 7 bands each side
        assert_eq!(breaks.len(), 2 + 13);
    }

    #[test]
    fn test_domain_errors() {
        let constant = Sample::from_raw(&[3.0, 3.0, 3.0]).unwrap();
        assert!(matches!(msd_breaks(&constant, 1.0, false), Err(Error::Domain(_))));

        for k in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(msd_breaks(&one_to_ten(), k, true), Err(Error::Domain(_))));
        }
    }
}
