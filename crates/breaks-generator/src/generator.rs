//! Break generation: normalization, dispatch and finalization

use crate::algorithms::{
    arithmetic_breaks, finalize, geometric_breaks, msd_breaks, nested_means_breaks, q6_breaks,
};
use crate::break_set::BreakSet;
use crate::method::Method;
use crate::params::BreakParams;
use breaks_classify::{BundledProvider, ClassStyle, ClassificationProvider};
use breaks_core::{Error, Result, Sample};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes class breaks, delegating the standard styles to a provider
///
/// The generator holds no state besides its provider, so one instance can
/// serve any number of calls, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct BreakGenerator<P = BundledProvider> {
    provider: P,
}

impl<P: ClassificationProvider> BreakGenerator<P> {
    /// Create a generator backed by `provider`
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The classification provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Compute breaks for a sample in which `NaN` marks missing values
    #[instrument(skip(self, sample, params), fields(n = sample.len(), method = %params.method))]
    pub fn compute(&self, sample: &[f64], params: &BreakParams) -> Result<BreakSet> {
        let sample = Sample::from_raw(sample)?;
        self.compute_sample(&sample, params)
    }

    /// Compute breaks for a sample in which `None` marks missing values
    #[instrument(skip(self, sample, params), fields(n = sample.len(), method = %params.method))]
    pub fn compute_with_missing(
        &self,
        sample: &[Option<f64>],
        params: &BreakParams,
    ) -> Result<BreakSet> {
        let sample = Sample::from_options(sample)?;
        self.compute_sample(&sample, params)
    }

    /// Compute breaks for an already normalized sample
    pub fn compute_sample(&self, sample: &Sample, params: &BreakParams) -> Result<BreakSet> {
        let class_count = sample.resolve_class_count(params.class_count)?;

        let breaks = match params.method {
            Method::Q6 => q6_breaks(sample)?,
            Method::Geom => geometric_breaks(sample, class_count)?,
            Method::Arith => arithmetic_breaks(sample, class_count)?,
            Method::Em => nested_means_breaks(sample, class_count)?,
            Method::Msd => msd_breaks(sample, params.k, params.middle)?,
            delegated => {
                let style = delegated
                    .style()
                    .ok_or_else(|| Error::InvalidMethod(delegated.name().to_string()))?;
                self.delegate(sample, class_count, style)?
            }
        };

        debug!(method = %params.method, class_count, breaks = breaks.len(), "computed breaks");
        Ok(BreakSet::new(breaks))
    }

    /// Compute breaks for many samples with the same parameters
    ///
    /// Results come back in input order. With the `parallel` feature the
    /// samples are processed on the rayon thread pool.
    pub fn compute_many<S>(&self, samples: &[S], params: &BreakParams) -> Vec<Result<BreakSet>>
    where
        S: AsRef<[f64]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            samples
                .par_iter()
                .map(|sample| self.compute(sample.as_ref(), params))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            samples
                .iter()
                .map(|sample| self.compute(sample.as_ref(), params))
                .collect()
        }
    }

    fn delegate(&self, sample: &Sample, class_count: usize, style: ClassStyle) -> Result<Vec<f64>> {
        debug!(style = %style, class_count, "delegating to classification provider");
        let breaks = self.provider.classify(sample.values(), class_count, style)?;
        if breaks.iter().any(|b| !b.is_finite()) {
            return Err(Error::domain(format!(
                "classification provider returned non-finite breaks for style {style}"
            )));
        }
        Ok(finalize(breaks))
    }
}

/// Compute breaks with the bundled provider
///
/// `NaN` entries of `sample` are treated as missing. `k` and `middle` only
/// affect [`Method::Msd`].
///
/// ```rust
/// use breaks_generator::{compute_breaks, Method};
///
/// let data: Vec<f64> = (1..=100).map(|x| x as f64).collect();
/// let breaks = compute_breaks(&data, None, Method::Quantile, 1.0, false).unwrap();
/// assert_eq!(breaks.len(), 8);
///
/// let breaks = compute_breaks(&data, Some(8), "em".parse().unwrap(), 1.0, false).unwrap();
/// assert_eq!(breaks.len(), 9);
/// ```
pub fn compute_breaks(
    sample: &[f64],
    class_count: Option<usize>,
    method: Method,
    k: f64,
    middle: bool,
) -> Result<Vec<f64>> {
    let params = BreakParams {
        method,
        class_count,
        k,
        middle,
    };
    BreakGenerator::<BundledProvider>::default()
        .compute(sample, &params)
        .map(BreakSet::into_vec)
}
