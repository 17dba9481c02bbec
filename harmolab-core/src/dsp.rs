//! Generic math helpers shared by the generators and the filter engine.
//!
//! Design goals:
//! - Side-effect free helpers that are easy to test
//! - Math backend selection behind the crate feature `fast-math`
//! - `f64` throughout: series in this crate are analysis data, not audio
//!
//! Features used by this file:
//! - `fast-math` : enables a polynomial sine approximation for hot loops
//!
//! Conventions:
//! - All functions are `#[inline]` where useful to help the optimizer.
//! - Argument and return domains are documented per function.

use core::f64::consts::PI;

use cfg_if::cfg_if;

// --------------------------------- Constants -------------------------------------

/// 2π (commonly useful)
pub const TAU: f64 = 2.0 * PI;

// --------------------------------- Trig backend ----------------------------------

cfg_if! {
    if #[cfg(feature = "fast-math")] {
        /// Sine used by the harmonic generator.
        ///
        /// `fast-math` build: 5th-order odd polynomial after range reduction
        /// into [-π, π]; max abs error ~1e-3, below anything visible on a plot.
        #[inline]
        pub fn sin(x: f64) -> f64 {
            // Range reduce to [-π, π].
            let k = (x / TAU).round();
            let xr = x - k * TAU;

            // 5th-order odd polynomial: sin(x) ≈ x * (a + b x^2 + c x^4)
            let x2 = xr * xr;
            xr * (0.999_979_313_3 + x2 * (-0.166_624_432_0 + x2 * 0.008_308_978_98))
        }
    } else {
        /// Sine used by the harmonic generator. Exact `f64::sin` unless the
        /// `fast-math` feature swaps in a polynomial approximation.
        #[inline]
        pub fn sin(x: f64) -> f64 {
            x.sin()
        }
    }
}

// --------------------------------- Series stats ----------------------------------

/// Arithmetic mean of a series. Empty input returns 0.0.
#[inline]
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population variance (divide by n, not n-1). Empty input returns 0.0.
///
/// The noise generator is specified by its population σ², so tests and meters
/// compare against this estimator.
#[inline]
pub fn variance(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    let m = mean(xs);
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / xs.len() as f64
}

/// Root-mean-square of a series. Empty input returns 0.0.
#[inline]
pub fn rms(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    (xs.iter().map(|x| x * x).sum::<f64>() / xs.len() as f64).sqrt()
}

// ------------------------------------ Tests --------------------------------------
