//! Parameter records, their documented defaults, and UI-facing ranges.
//!
//! The controller owns exactly one [`Parameters`] value and is its only
//! writer. Defaults are not module globals: hosts build a `Parameters`
//! (usually `Parameters::default()`) and inject it at controller
//! construction; reset reads that injected copy back.
//!
//! Ranges in [`ranges`] are what hosts should enforce on their input widgets.
//! The engine does not re-clamp; the only numeric constraint it enforces
//! itself is the low-pass design check in the filter engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::fmt;

use harmolab_core::filters::FilterSpec;
use harmolab_core::grid::TimeGrid;

/// Default grid: 10 s at 100 Hz → 1000 samples, 0.01 s apart.
pub const GRID_DURATION_SECS: f64 = 10.0;
pub const GRID_SAMPLE_RATE_HZ: f64 = 100.0;

/// Build the process-wide default grid.
pub fn default_grid() -> TimeGrid {
    TimeGrid::new(GRID_DURATION_SECS, GRID_SAMPLE_RATE_HZ)
}

/// Host-facing filter selection. The payload-free tag that widgets toggle;
/// [`FilterParams::spec`] turns it into the core engine's payload variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterKind {
    LowPassIir,
    MovingAverage,
}

impl fmt::Display for FilterKind {
    /// Plot-label text, e.g. `Filtered Output (Butterworth)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::LowPassIir => write!(f, "Butterworth"),
            FilterKind::MovingAverage => write!(f, "Moving Average"),
        }
    }
}

/// Harmonic source parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignalParams {
    pub amplitude: f64,
    pub frequency: f64,
    /// Radians; hosts keep this in [0, 2π], the generator accepts any real.
    pub phase: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self { amplitude: 1.0, frequency: 1.0, phase: 0.0 }
    }
}

/// Additive noise parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NoiseParams {
    pub mean: f64,
    pub variance: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self { mean: 0.0, variance: 0.1 }
    }
}

/// Filter selection. `order` doubles as the moving-average window length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilterParams {
    pub kind: FilterKind,
    /// Low-pass cutoff in Hz; ignored by the moving average.
    pub cutoff_hz: f64,
    /// Low-pass order, or moving-average window length.
    pub order: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self { kind: FilterKind::LowPassIir, cutoff_hz: 1.0, order: 5 }
    }
}

impl FilterParams {
    /// The core filter engine's tagged spec for the current selection.
    pub fn spec(&self) -> FilterSpec {
        match self.kind {
            FilterKind::LowPassIir => FilterSpec::LowPass {
                cutoff_hz: self.cutoff_hz,
                order: self.order as usize,
            },
            FilterKind::MovingAverage => FilterSpec::MovingAverage { window: self.order as usize },
        }
    }
}

/// The complete parameter record the controller owns.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub signal: SignalParams,
    pub noise: NoiseParams,
    pub filter: FilterParams,
    /// When false the noise generator is skipped and the displayed series is
    /// the clean one.
    pub show_noise: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            signal: SignalParams::default(),
            noise: NoiseParams::default(),
            filter: FilterParams::default(),
            show_noise: true,
        }
    }
}

/// UI-enforced `(min, max)` bounds for each tunable parameter.
///
/// Widgets clamp to these; the engine trusts them and does not re-validate.
pub mod ranges {
    use harmolab_core::dsp::TAU;

    pub const AMPLITUDE: (f64, f64) = (0.1, 10.0);
    pub const FREQUENCY_HZ: (f64, f64) = (0.1, 10.0);
    pub const PHASE_RAD: (f64, f64) = (0.0, TAU);
    pub const NOISE_MEAN: (f64, f64) = (-1.0, 1.0);
    pub const NOISE_VARIANCE: (f64, f64) = (0.0, 1.0);
    pub const CUTOFF_HZ: (f64, f64) = (0.1, 5.0);
    pub const FILTER_ORDER: (u32, u32) = (1, 15);
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let p = Parameters::default();
        assert_eq!(p.signal, SignalParams { amplitude: 1.0, frequency: 1.0, phase: 0.0 });
        assert_eq!(p.noise, NoiseParams { mean: 0.0, variance: 0.1 });
        assert_eq!(p.filter.kind, FilterKind::LowPassIir);
        assert_eq!(p.filter.cutoff_hz, 1.0);
        assert_eq!(p.filter.order, 5);
        assert!(p.show_noise);
    }

    #[test]
    fn default_grid_is_1000_samples() {
        assert_eq!(default_grid().len(), 1000);
    }

    #[test]
    fn filter_params_map_to_core_spec() {
        let lp = FilterParams { kind: FilterKind::LowPassIir, cutoff_hz: 2.5, order: 3 };
        assert_eq!(lp.spec(), FilterSpec::LowPass { cutoff_hz: 2.5, order: 3 });

        let ma = FilterParams { kind: FilterKind::MovingAverage, cutoff_hz: 2.5, order: 9 };
        assert_eq!(ma.spec(), FilterSpec::MovingAverage { window: 9 });
    }

    #[test]
    fn kind_labels_for_plots() {
        assert_eq!(FilterKind::LowPassIir.to_string(), "Butterworth");
        assert_eq!(FilterKind::MovingAverage.to_string(), "Moving Average");
    }
}
