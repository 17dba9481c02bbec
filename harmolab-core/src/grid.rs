//! The fixed time grid every series is aligned to.
//!
//! A grid is built once at host startup and never mutated; all generators and
//! filters produce series with exactly `grid.len()` samples. Sample spacing
//! is exactly `1/Fs`, and `len = floor(duration · Fs)`; for the default
//! 10 s at 100 Hz that is 1000 samples at 0.01 s.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A series of samples aligned 1:1 with a [`TimeGrid`].
///
/// Series are ephemeral pipeline outputs: recomputed on every parameter
/// change, never cached across writes.
pub type Series = Vec<f64>;

/// Evenly spaced time samples starting at t = 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeGrid {
    duration_secs: f64,
    sample_rate_hz: f64,
    len: usize,
}

impl TimeGrid {
    /// Build a grid covering `[0, duration_secs)` sampled at `sample_rate_hz`.
    ///
    /// Non-positive duration or rate yields an empty grid rather than a
    /// panic; hosts validate their own configuration.
    pub fn new(duration_secs: f64, sample_rate_hz: f64) -> Self {
        let len = if duration_secs > 0.0 && sample_rate_hz > 0.0 {
            (duration_secs * sample_rate_hz).floor() as usize
        } else {
            0
        };
        Self { duration_secs, sample_rate_hz, len }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Half the sampling rate; the upper bound for any valid low-pass cutoff.
    #[inline]
    pub fn nyquist_hz(&self) -> f64 {
        0.5 * self.sample_rate_hz
    }

    /// Time of sample `i` in seconds.
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 / self.sample_rate_hz
    }

    /// Iterate over all sample times.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time_at(i))
    }

    /// Materialize the time axis (useful for CSV export and plotting hosts).
    pub fn times(&self) -> Series {
        self.iter().collect()
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lab_grid_has_1000_samples() {
        let g = TimeGrid::new(10.0, 100.0);
        assert_eq!(g.len(), 1000);
        assert!((g.time_at(1) - 0.01).abs() < 1e-15);
        assert!((g.time_at(999) - 9.99).abs() < 1e-12);
        assert!((g.nyquist_hz() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_grids_are_empty() {
        assert!(TimeGrid::new(0.0, 100.0).is_empty());
        assert!(TimeGrid::new(10.0, 0.0).is_empty());
        assert!(TimeGrid::new(-1.0, 100.0).is_empty());
    }

    #[test]
    fn times_matches_iter() {
        let g = TimeGrid::new(0.05, 100.0);
        assert_eq!(g.times(), vec![0.0, 0.01, 0.02, 0.03, 0.04]);
    }
}
