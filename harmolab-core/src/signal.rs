//! Harmonic signal generation.

use crate::dsp::{self, TAU};
use crate::grid::{Series, TimeGrid};

/// Sample `A·sin(2π·f·t + φ)` over every point of the grid.
///
/// Pure and deterministic; the output always has exactly `grid.len()`
/// samples. `phase` is accepted as any real; sine is periodic, so callers
/// that clamp to [0, 2π] get identical output for φ and φ + 2π.
pub fn generate_harmonic(grid: &TimeGrid, amplitude: f64, frequency: f64, phase: f64) -> Series {
    grid.iter()
        .map(|t| amplitude * dsp::sin(TAU * frequency * t + phase))
        .collect()
}

// ------------------------------------ Tests --------------------------------------
