//! One full recompute cycle: generate → perturb → filter.
//!
//! The pipeline is stateless apart from the grid it was built over; given the
//! same parameters and RNG state it produces the same payload. The controller
//! re-runs it on every parameter write.

use rand::Rng;

use harmolab_core::filters::{apply_filter, FilterError};
use harmolab_core::grid::{Series, TimeGrid};
use harmolab_core::noise::generate_noise;
use harmolab_core::signal::generate_harmonic;

use crate::params::{FilterKind, Parameters};

/// Everything the render collaborator needs for one frame: the two top-plot
/// series and the bottom-plot series, tagged with the filter kind for
/// labeling.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPayload {
    /// Noise-free harmonic.
    pub clean: Series,
    /// What the top plot overlays on the clean trace: clean + noise when
    /// noise is shown, otherwise the clean series again.
    pub displayed: Series,
    /// The displayed series after the selected filter, zero-phase aligned.
    pub filtered: Series,
    pub filter_kind: FilterKind,
}

/// Recompute driver over one immutable grid.
#[derive(Clone, Debug)]
pub struct Pipeline {
    grid: TimeGrid,
}

impl Pipeline {
    pub fn new(grid: TimeGrid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Run one cycle.
    ///
    /// Fails only if the low-pass design rejects the cutoff/rate combination;
    /// in that case no payload is produced and nothing is partially filtered.
    /// The noise draw advances `rng` once per call when noise is shown.
    pub fn run<R: Rng + ?Sized>(
        &self,
        params: &Parameters,
        rng: &mut R,
    ) -> Result<RenderPayload, FilterError> {
        let s = &params.signal;
        let clean = generate_harmonic(&self.grid, s.amplitude, s.frequency, s.phase);

        let displayed = if params.show_noise {
            let noise = generate_noise(self.grid.len(), params.noise.mean, params.noise.variance, rng);
            clean.iter().zip(&noise).map(|(c, n)| c + n).collect()
        } else {
            clean.clone()
        };

        let filtered = apply_filter(&displayed, self.grid.sample_rate_hz(), &params.filter.spec())?;

        Ok(RenderPayload { clean, displayed, filtered, filter_kind: params.filter.kind })
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::default_grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn payload_series_are_grid_aligned() {
        let pipeline = Pipeline::new(default_grid());
        let mut rng = StdRng::seed_from_u64(3);
        let out = pipeline.run(&Parameters::default(), &mut rng).unwrap();
        assert_eq!(out.clean.len(), 1000);
        assert_eq!(out.displayed.len(), 1000);
        assert_eq!(out.filtered.len(), 1000);
        assert_eq!(out.filter_kind, FilterKind::LowPassIir);
    }

    #[test]
    fn hidden_noise_displays_the_clean_series() {
        let pipeline = Pipeline::new(default_grid());
        let mut rng = StdRng::seed_from_u64(3);
        let params = Parameters { show_noise: false, ..Parameters::default() };
        let out = pipeline.run(&params, &mut rng).unwrap();
        assert_eq!(out.displayed, out.clean);
    }

    #[test]
    fn shown_noise_perturbs_with_matching_moments() {
        let pipeline = Pipeline::new(default_grid());
        let mut rng = StdRng::seed_from_u64(3);
        let out = pipeline.run(&Parameters::default(), &mut rng).unwrap();
        let residual: Vec<f64> =
            out.displayed.iter().zip(&out.clean).map(|(d, c)| d - c).collect();
        // Default noise: μ = 0, σ² = 0.1; 1000 samples is enough for a loose check.
        assert!(harmolab_core::dsp::mean(&residual).abs() < 0.05);
        assert!((harmolab_core::dsp::variance(&residual) - 0.1).abs() < 0.03);
    }

    #[test]
    fn design_failure_produces_no_payload() {
        let pipeline = Pipeline::new(default_grid());
        let mut rng = StdRng::seed_from_u64(3);
        let mut params = Parameters::default();
        params.filter.cutoff_hz = 60.0; // past the 50 Hz nyquist
        assert!(pipeline.run(&params, &mut rng).is_err());
    }
}
