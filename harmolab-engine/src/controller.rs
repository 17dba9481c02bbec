//! The reactive controller: parameter events in, render payloads out.
//!
//! There is exactly one logical actor. Every event is handled synchronously
//! and runs the whole pipeline to completion before the next event is looked
//! at, so a payload can never mix series from two parameter states. Hosts
//! bind their native event loop (widget callbacks, stdin lines, FFI calls)
//! straight to [`Controller::handle_event`]; no queuing or locking is needed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use harmolab_core::filters::FilterError;
use harmolab_core::grid::TimeGrid;

use crate::params::{FilterKind, Parameters};
use crate::pipeline::{Pipeline, RenderPayload};

/// One parameter write, or a reset to the injected defaults.
///
/// Values arrive pre-clamped by the host's widgets (see
/// [`crate::params::ranges`]); the engine applies them as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlEvent {
    Amplitude(f64),
    Frequency(f64),
    Phase(f64),
    NoiseMean(f64),
    NoiseVariance(f64),
    Cutoff(f64),
    FilterOrder(u32),
    Filter(FilterKind),
    ShowNoise(bool),
    /// Restore every field to the defaults injected at construction, then
    /// recompute once (equivalent to an all-fields change).
    Reset,
}

/// Owns the current parameter record, the random source, and the last good
/// render.
pub struct Controller {
    pipeline: Pipeline,
    defaults: Parameters,
    params: Parameters,
    rng: StdRng,
    last: RenderPayload,
}

impl Controller {
    /// Build a controller with an entropy-seeded random source and compute
    /// the startup render from `defaults`.
    ///
    /// Fails only if the injected defaults are themselves an invalid filter
    /// design for this grid.
    pub fn new(grid: TimeGrid, defaults: Parameters) -> Result<Self, FilterError> {
        Self::with_rng(grid, defaults, StdRng::from_entropy())
    }

    /// Like [`Controller::new`] but with a fixed noise seed, for reproducible
    /// runs and tests.
    pub fn seeded(grid: TimeGrid, defaults: Parameters, seed: u64) -> Result<Self, FilterError> {
        Self::with_rng(grid, defaults, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: TimeGrid, defaults: Parameters, mut rng: StdRng) -> Result<Self, FilterError> {
        let pipeline = Pipeline::new(grid);
        let last = pipeline.run(&defaults, &mut rng)?;
        Ok(Self { pipeline, defaults, params: defaults, rng, last })
    }

    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        self.pipeline.grid()
    }

    #[inline]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    #[inline]
    pub fn defaults(&self) -> &Parameters {
        &self.defaults
    }

    /// The most recent successfully computed payload. Stays valid across a
    /// failed event, so hosts keep displaying the previous frame.
    #[inline]
    pub fn last_render(&self) -> &RenderPayload {
        &self.last
    }

    /// Apply one event: write the parameter, recompute, return the new
    /// payload.
    ///
    /// On a filter-design failure the parameter write stands (the host's
    /// widget already shows the new value), the recompute is aborted, the
    /// previous payload is retained, and the error is surfaced to the caller.
    pub fn handle_event(&mut self, event: ControlEvent) -> Result<&RenderPayload, FilterError> {
        self.apply(event);
        let payload = self.pipeline.run(&self.params, &mut self.rng)?;
        self.last = payload;
        Ok(&self.last)
    }

    fn apply(&mut self, event: ControlEvent) {
        use ControlEvent::*;
        match event {
            Amplitude(v) => self.params.signal.amplitude = v,
            Frequency(v) => self.params.signal.frequency = v,
            Phase(v) => self.params.signal.phase = v,
            NoiseMean(v) => self.params.noise.mean = v,
            NoiseVariance(v) => self.params.noise.variance = v,
            Cutoff(v) => self.params.filter.cutoff_hz = v,
            FilterOrder(v) => self.params.filter.order = v,
            Filter(kind) => self.params.filter.kind = kind,
            ShowNoise(v) => self.params.show_noise = v,
            Reset => self.params = self.defaults,
        }
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::default_grid;

    #[test]
    fn startup_render_exists_and_is_aligned() {
        let c = Controller::seeded(default_grid(), Parameters::default(), 1).unwrap();
        assert_eq!(c.last_render().clean.len(), c.grid().len());
        assert_eq!(c.last_render().filtered.len(), c.grid().len());
    }

    #[test]
    fn event_updates_parameter_and_payload() {
        let mut c = Controller::seeded(default_grid(), Parameters::default(), 1).unwrap();
        let before_peak = c.last_render().clean.iter().fold(0.0f64, |m, y| m.max(y.abs()));
        let after = c.handle_event(ControlEvent::Amplitude(4.0)).unwrap();
        let after_peak = after.clean.iter().fold(0.0f64, |m, y| m.max(y.abs()));
        assert!((after_peak - 4.0 * before_peak).abs() < 1e-9);
        assert_eq!(c.params().signal.amplitude, 4.0);
    }

    #[test]
    fn failed_event_keeps_write_and_previous_render() {
        let mut c = Controller::seeded(default_grid(), Parameters::default(), 1).unwrap();
        let before = c.last_render().clone();
        // 60 Hz cutoff on a 100 Hz grid: normalized cutoff 1.2, design fails.
        let err = c.handle_event(ControlEvent::Cutoff(60.0)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCutoff { .. }));
        assert_eq!(c.params().filter.cutoff_hz, 60.0);
        assert_eq!(c.last_render(), &before);
    }

    #[test]
    fn bad_defaults_fail_construction() {
        let mut defaults = Parameters::default();
        defaults.filter.cutoff_hz = 500.0;
        assert!(Controller::seeded(default_grid(), defaults, 1).is_err());
    }
}
