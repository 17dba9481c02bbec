//! Additive Gaussian noise generation.
//!
//! The random source is injected rather than global: production hosts pass an
//! entropy-seeded `StdRng`, tests pass a fixed-seed one and get reproducible
//! series. Statistical contracts (mean μ, population variance σ²) hold for
//! any `Rng`.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::grid::Series;

/// Draw `len` independent samples from N(mean, variance).
///
/// `variance == 0` degenerates to `len` exact copies of `mean`. Negative or
/// non-finite variance is treated as 0: callers keep σ² ≥ 0, and this
/// generator never fails.
pub fn generate_noise<R: Rng + ?Sized>(len: usize, mean: f64, variance: f64, rng: &mut R) -> Series {
    let variance = if variance.is_finite() { variance.max(0.0) } else { 0.0 };
    if variance == 0.0 {
        return vec![mean; len];
    }
    match Normal::new(mean, variance.sqrt()) {
        Ok(normal) => (0..len).map(|_| normal.sample(rng)).collect(),
        // Unreachable for finite mean and positive finite variance; fall
        // back to the constant series.
        Err(_) => vec![mean; len],
    }
}

// ------------------------------------ Tests --------------------------------------
