//! Harmolab Core — batch DSP primitives for the interactive signal explorer.
//!
//! Features
//! - `fast-math`: polynomial sine approximation in the generator hot path
//! - `serde`    : derives on grid/spec types for hosts that ship them around
//!
//! Modules
//! - [`dsp`]     : math backend and series statistics (mean/variance/rms)
//! - [`grid`]    : the fixed time grid and the `Series` alias
//! - [`signal`]  : harmonic generation over a grid
//! - [`noise`]   : additive Gaussian noise with an injected random source
//! - [`filters`] : Butterworth zero-phase low-pass and moving average
//!
//! Design
//! - Whole-series computation: every operation consumes and produces series
//!   aligned 1:1 with one immutable [`grid::TimeGrid`]
//! - Generators never fail; the filter engine fails only at design time
//! - No global state: randomness is injected, defaults live in the engine

pub mod dsp;
pub mod filters;
pub mod grid;
pub mod noise;
pub mod signal;

/// Commonly used types/functions for convenience:
pub mod prelude {
    pub use crate::dsp::{mean, rms, variance, TAU};
    pub use crate::filters::{
        apply_filter, design_butterworth_lowpass, filtfilt, moving_average, FilterError,
        FilterSpec,
    };
    pub use crate::grid::{Series, TimeGrid};
    pub use crate::noise::generate_noise;
    pub use crate::signal::generate_harmonic;
}

#[cfg(test)]
mod smoke {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn prelude_exists() {
        use crate::prelude::*;
        let grid = TimeGrid::new(1.0, 100.0);
        let clean = generate_harmonic(&grid, 1.0, 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(0);
        let noise = generate_noise(grid.len(), 0.0, 0.1, &mut rng);
        let noisy: Series = clean.iter().zip(&noise).map(|(c, n)| c + n).collect();
        let spec = FilterSpec::LowPass { cutoff_hz: 1.0, order: 5 };
        let filtered = apply_filter(&noisy, grid.sample_rate_hz(), &spec).unwrap();
        assert_eq!(filtered.len(), grid.len());
        let _ = (mean(&filtered), variance(&filtered), rms(&filtered));
    }
}
