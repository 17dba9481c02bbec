//! Harmolab Engine — parameters + pipeline + reactive controller.
//!
//! Crate layout:
//! - [`params`]     : parameter records, documented defaults, UI ranges
//! - [`pipeline`]   : one recompute cycle (generate → perturb → filter)
//! - [`controller`] : event handling, reset, last-good-render retention
//!
//! The engine is single-threaded and synchronous by design: a host event loop
//! calls [`Controller::handle_event`] and gets the full frame back before
//! anything else can touch the parameter record.

pub mod controller;
pub mod params;
pub mod pipeline;

// Re-export some commonly used items to make downstream imports ergonomic.
pub use controller::{ControlEvent, Controller};
pub use params::{default_grid, FilterKind, FilterParams, NoiseParams, Parameters, SignalParams};
pub use pipeline::{Pipeline, RenderPayload};

// The error hosts see on a rejected filter design.
pub use harmolab_core::filters::FilterError;
