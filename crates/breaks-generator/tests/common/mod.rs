//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal};

/// Generate normal distribution data
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate strictly positive, right-skewed data
pub fn generate_lognormal(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lognormal = LogNormal::new(1.0, 0.75).unwrap();
    (0..n).map(|_| lognormal.sample(&mut rng)).collect()
}

/// Generate uniform distribution data
pub fn generate_uniform(n: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(min..max)).collect()
}

/// `1.0, 2.0, ..., n`
pub fn one_to(n: usize) -> Vec<f64> {
    (1..=n).map(|x| x as f64).collect()
}

/// Named datasets, all strictly positive so every method applies
pub fn positive_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("tiny", vec![1.0, 2.0, 3.0]),
        ("one_to_ten", one_to(10)),
        ("one_to_hundred", one_to(100)),
        ("lognormal", generate_lognormal(250, 42)),
        ("uniform", generate_uniform(250, 0.5, 500.0, 7)),
        ("shifted_normal", generate_normal(250, 100.0, 15.0, 3)),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 8.0]),
    ]
}

/// Smallest and largest value
pub fn extremes(data: &[f64]) -> (f64, f64) {
    data.iter()
        .filter(|v| !v.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

/// Breaks never decrease
pub fn is_non_decreasing(breaks: &[f64]) -> bool {
    breaks.windows(2).all(|w| w[0] <= w[1])
}
