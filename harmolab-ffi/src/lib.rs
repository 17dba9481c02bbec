//! C ABI wrapper for the Harmolab controller.
//!
//! Exposes a small set of functions to create/destroy a controller, push
//! parameter events, and copy the rendered series out into caller-owned
//! buffers. This is the seam a foreign host UI (sliders, plots) binds to.
//!
//! ABI notes
//! - All functions are `extern "C"` and `#[no_mangle]`.
//! - Opaque handle type: `HarmolabController` (heap-allocated; you own/delete it).
//! - Parameter setters return a status code; on `HARMOLAB_INVALID_FILTER` the
//!   write stands but the previous render is what the copy functions see.
//!
//! Threading
//! - The object is NOT thread-safe; call all functions from one thread.

use harmolab_core::grid::TimeGrid;
use harmolab_engine::{ControlEvent, Controller, FilterKind, Parameters};

/// Event applied and a fresh render computed.
pub const HARMOLAB_OK: i32 = 0;
/// The low-pass design rejected the cutoff/rate combination; previous render retained.
pub const HARMOLAB_INVALID_FILTER: i32 = 1;
/// Null handle or out-of-range argument.
pub const HARMOLAB_BAD_ARG: i32 = -1;

/// Series selector for `harmolab_copy_series`.
pub const HARMOLAB_SERIES_CLEAN: u32 = 0;
pub const HARMOLAB_SERIES_DISPLAYED: u32 = 1;
pub const HARMOLAB_SERIES_FILTERED: u32 = 2;

/// Filter kind codes shared with `harmolab_set_filter_kind`.
pub const HARMOLAB_FILTER_LOWPASS: u32 = 0;
pub const HARMOLAB_FILTER_MOVING_AVERAGE: u32 = 1;

/// Opaque controller wrapper we hand to C.
pub struct HarmolabController {
    inner: Controller,
}

fn new_inner(duration_secs: f64, sample_rate_hz: f64, seed: Option<u64>) -> Option<Controller> {
    let grid = TimeGrid::new(duration_secs, sample_rate_hz);
    if grid.is_empty() {
        return None;
    }
    let defaults = Parameters::default();
    match seed {
        Some(s) => Controller::seeded(grid, defaults, s).ok(),
        None => Controller::new(grid, defaults).ok(),
    }
}

// --- Creation / destruction -------------------------------------------------------

/// Create a controller over a `duration_secs` × `sample_rate_hz` grid with
/// the documented default parameters and an entropy-seeded noise source.
/// Returns a non-null pointer on success, or null on an invalid grid.
#[no_mangle]
pub extern "C" fn harmolab_create(duration_secs: f64, sample_rate_hz: f64) -> *mut HarmolabController {
    match new_inner(duration_secs, sample_rate_hz, None) {
        Some(inner) => Box::into_raw(Box::new(HarmolabController { inner })),
        None => std::ptr::null_mut(),
    }
}

/// Like `harmolab_create` but with a fixed noise seed (reproducible runs).
#[no_mangle]
pub extern "C" fn harmolab_create_seeded(
    duration_secs: f64,
    sample_rate_hz: f64,
    seed: u64,
) -> *mut HarmolabController {
    match new_inner(duration_secs, sample_rate_hz, Some(seed)) {
        Some(inner) => Box::into_raw(Box::new(HarmolabController { inner })),
        None => std::ptr::null_mut(),
    }
}

/// Destroy a controller previously returned by a create function.
#[no_mangle]
pub extern "C" fn harmolab_destroy(controller: *mut HarmolabController) {
    if !controller.is_null() {
        unsafe { drop(Box::from_raw(controller)); }
    }
}

// --- Events -----------------------------------------------------------------------

fn push_event(controller: *mut HarmolabController, event: ControlEvent) -> i32 {
    if controller.is_null() {
        return HARMOLAB_BAD_ARG;
    }
    let c = unsafe { &mut *controller };
    match c.inner.handle_event(event) {
        Ok(_) => HARMOLAB_OK,
        Err(_) => HARMOLAB_INVALID_FILTER,
    }
}

#[no_mangle]
pub extern "C" fn harmolab_set_amplitude(controller: *mut HarmolabController, value: f64) -> i32 {
    push_event(controller, ControlEvent::Amplitude(value))
}

#[no_mangle]
pub extern "C" fn harmolab_set_frequency(controller: *mut HarmolabController, value: f64) -> i32 {
    push_event(controller, ControlEvent::Frequency(value))
}

#[no_mangle]
pub extern "C" fn harmolab_set_phase(controller: *mut HarmolabController, value: f64) -> i32 {
    push_event(controller, ControlEvent::Phase(value))
}

#[no_mangle]
pub extern "C" fn harmolab_set_noise_mean(controller: *mut HarmolabController, value: f64) -> i32 {
    push_event(controller, ControlEvent::NoiseMean(value))
}

#[no_mangle]
pub extern "C" fn harmolab_set_noise_variance(controller: *mut HarmolabController, value: f64) -> i32 {
    push_event(controller, ControlEvent::NoiseVariance(value))
}

#[no_mangle]
pub extern "C" fn harmolab_set_cutoff(controller: *mut HarmolabController, hz: f64) -> i32 {
    push_event(controller, ControlEvent::Cutoff(hz))
}

#[no_mangle]
pub extern "C" fn harmolab_set_filter_order(controller: *mut HarmolabController, order: u32) -> i32 {
    push_event(controller, ControlEvent::FilterOrder(order))
}

/// `kind` is `HARMOLAB_FILTER_LOWPASS` or `HARMOLAB_FILTER_MOVING_AVERAGE`.
#[no_mangle]
pub extern "C" fn harmolab_set_filter_kind(controller: *mut HarmolabController, kind: u32) -> i32 {
    let kind = match kind {
        HARMOLAB_FILTER_LOWPASS => FilterKind::LowPassIir,
        HARMOLAB_FILTER_MOVING_AVERAGE => FilterKind::MovingAverage,
        _ => return HARMOLAB_BAD_ARG,
    };
    push_event(controller, ControlEvent::Filter(kind))
}

/// Nonzero `shown` overlays noise on the displayed series.
#[no_mangle]
pub extern "C" fn harmolab_set_show_noise(controller: *mut HarmolabController, shown: u32) -> i32 {
    push_event(controller, ControlEvent::ShowNoise(shown != 0))
}

/// Restore the documented defaults and recompute.
#[no_mangle]
pub extern "C" fn harmolab_reset(controller: *mut HarmolabController) -> i32 {
    push_event(controller, ControlEvent::Reset)
}

// --- Reading the render -----------------------------------------------------------

/// Number of samples in every rendered series (the grid length).
/// Returns 0 on a null handle.
#[no_mangle]
pub extern "C" fn harmolab_sample_count(controller: *const HarmolabController) -> u32 {
    if controller.is_null() {
        return 0;
    }
    let c = unsafe { &*controller };
    c.inner.grid().len() as u32
}

/// Active filter kind code of the last render, or `HARMOLAB_BAD_ARG` on null.
#[no_mangle]
pub extern "C" fn harmolab_filter_kind(controller: *const HarmolabController) -> i32 {
    if controller.is_null() {
        return HARMOLAB_BAD_ARG;
    }
    let c = unsafe { &*controller };
    match c.inner.last_render().filter_kind {
        FilterKind::LowPassIir => HARMOLAB_FILTER_LOWPASS as i32,
        FilterKind::MovingAverage => HARMOLAB_FILTER_MOVING_AVERAGE as i32,
    }
}

/// Copy one series of the last good render into `out` (capacity `len`
/// doubles). Copies `min(len, sample_count)` values and returns the count;
/// returns 0 on a null handle/buffer or an unknown selector.
#[no_mangle]
pub extern "C" fn harmolab_copy_series(
    controller: *const HarmolabController,
    which: u32,
    out: *mut f64,
    len: u32,
) -> u32 {
    if controller.is_null() || out.is_null() {
        return 0;
    }
    let c = unsafe { &*controller };
    let payload = c.inner.last_render();
    let series = match which {
        HARMOLAB_SERIES_CLEAN => &payload.clean,
        HARMOLAB_SERIES_DISPLAYED => &payload.displayed,
        HARMOLAB_SERIES_FILTERED => &payload.filtered,
        _ => return 0,
    };
    let n = series.len().min(len as usize);
    let out = unsafe { std::slice::from_raw_parts_mut(out, n) };
    out.copy_from_slice(&series[..n]);
    n as u32
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_set_copy_destroy_roundtrip() {
        let c = harmolab_create_seeded(10.0, 100.0, 7);
        assert!(!c.is_null());
        assert_eq!(harmolab_sample_count(c), 1000);

        assert_eq!(harmolab_set_amplitude(c, 2.0), HARMOLAB_OK);
        assert_eq!(harmolab_set_filter_kind(c, HARMOLAB_FILTER_MOVING_AVERAGE), HARMOLAB_OK);
        assert_eq!(harmolab_filter_kind(c), HARMOLAB_FILTER_MOVING_AVERAGE as i32);

        let mut buf = vec![0.0f64; 1000];
        let copied = harmolab_copy_series(c, HARMOLAB_SERIES_FILTERED, buf.as_mut_ptr(), 1000);
        assert_eq!(copied, 1000);
        assert!(buf.iter().any(|x| *x != 0.0));

        harmolab_destroy(c);
    }

    #[test]
    fn invalid_filter_reports_and_retains_render() {
        let c = harmolab_create_seeded(10.0, 100.0, 7);
        let mut before = vec![0.0f64; 1000];
        harmolab_copy_series(c, HARMOLAB_SERIES_FILTERED, before.as_mut_ptr(), 1000);

        // 60 Hz cutoff on a 100 Hz grid cannot be designed.
        assert_eq!(harmolab_set_cutoff(c, 60.0), HARMOLAB_INVALID_FILTER);

        let mut after = vec![0.0f64; 1000];
        harmolab_copy_series(c, HARMOLAB_SERIES_FILTERED, after.as_mut_ptr(), 1000);
        assert_eq!(before, after);
        harmolab_destroy(c);
    }

    #[test]
    fn null_and_bad_args_are_rejected() {
        let null = std::ptr::null_mut();
        assert_eq!(harmolab_set_amplitude(null, 1.0), HARMOLAB_BAD_ARG);
        assert_eq!(harmolab_sample_count(null), 0);
        assert_eq!(harmolab_copy_series(null, 0, std::ptr::null_mut(), 0), 0);
        assert!(harmolab_create(0.0, 100.0).is_null());

        let c = harmolab_create_seeded(10.0, 100.0, 1);
        assert_eq!(harmolab_set_filter_kind(c, 99), HARMOLAB_BAD_ARG);
        let mut buf = [0.0f64; 4];
        assert_eq!(harmolab_copy_series(c, 99, buf.as_mut_ptr(), 4), 0);
        harmolab_destroy(c);
    }
}
