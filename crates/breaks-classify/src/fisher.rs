//! Fisher-Jenks natural breaks
//!
//! Fisher's exact method partitions sorted data into `k` contiguous classes
//! minimizing the total within-class sum of squared deviations. The
//! partition is found by dynamic programming over two matrices: the best
//! cost of covering `x[0..=i]` with `c + 1` classes, and the index where the
//! last of those classes starts.
//!
//! Each interior break sits halfway between the last value of one class and
//! the first value of the next, so a singleton class at either end still
//! yields its own break.

use crate::builders::{extremes, frame_breaks};
use crate::traits::ClassBuilder;
use breaks_core::{Error, Result};
use tracing::debug;

/// Fisher-Jenks natural breaks builder
pub struct FisherJenksBuilder {
    num_classes: usize,
}

impl FisherJenksBuilder {
    /// Create a new Fisher-Jenks builder
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }
}

/// Count of distinct values. Assumes sorted input.
fn unique_count_sorted(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        0
    } else {
        1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

/// Prefix sums of `x - shift` and `(x - shift)^2`
///
/// Shifting by the median keeps the squared sums well conditioned.
fn prefix_sums(sorted: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let shift = sorted[sorted.len() / 2];
    let mut sumx = Vec::with_capacity(sorted.len());
    let mut sumxsq = Vec::with_capacity(sorted.len());
    let (mut s, mut sq) = (0.0, 0.0);
    for &x in sorted {
        let d = x - shift;
        s += d;
        sq += d * d;
        sumx.push(s);
        sumxsq.push(sq);
    }
    (sumx, sumxsq)
}

/// Sum of squared deviations of `x[j..=i]`
#[inline(always)]
fn ssq(j: usize, i: usize, sumx: &[f64], sumxsq: &[f64]) -> f64 {
    let count = (i - j + 1) as f64;
    let sji = if j > 0 {
        let s = sumx[i] - sumx[j - 1];
        sumxsq[i] - sumxsq[j - 1] - s * s / count
    } else {
        sumxsq[i] - sumx[i] * sumx[i] / count
    };
    sji.max(0.0)
}

/// Start index of each class in the optimal `k`-partition of `sorted`
fn optimal_class_starts(sorted: &[f64], k: usize) -> Vec<usize> {
    let n = sorted.len();
    let (sumx, sumxsq) = prefix_sums(sorted);

    let mut cost = vec![vec![f64::INFINITY; n]; k];
    let mut backtrack = vec![vec![0usize; n]; k];

    for i in 0..n {
        cost[0][i] = ssq(0, i, &sumx, &sumxsq);
    }
    for c in 1..k {
        for i in c..n {
            for j in c..=i {
                let candidate = cost[c - 1][j - 1] + ssq(j, i, &sumx, &sumxsq);
                if candidate < cost[c][i] {
                    cost[c][i] = candidate;
                    backtrack[c][i] = j;
                }
            }
        }
    }

    let mut starts = vec![0usize; k];
    let mut end = n - 1;
    for c in (1..k).rev() {
        let start = backtrack[c][end];
        starts[c] = start;
        end = start - 1;
    }
    debug!(k, n, within_ss = cost[k - 1][n - 1], "fisher partition");
    starts
}

impl ClassBuilder for FisherJenksBuilder {
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Vec<f64>> {
        Error::check_class_count(self.num_classes)?;
        let (min, max) = extremes(sorted_sample)?;

        let k = self.num_classes.min(unique_count_sorted(sorted_sample));
        if k < self.num_classes {
            debug!(requested = self.num_classes, k, "fewer distinct values than classes");
        }
        if k <= 1 {
            return Ok(frame_breaks(min, max, std::iter::empty()));
        }

        let starts = optimal_class_starts(sorted_sample, k);
        Ok(frame_breaks(
            min,
            max,
            starts
                .into_iter()
                .skip(1)
                .map(|s| (sorted_sample[s - 1] + sorted_sample[s]) / 2.0),
        ))
    }
}
