//! Gaze-to-pointer action pipeline.
//!
//! This crate provides:
//! - Exponential moving average smoothing with per-session state
//! - Normalized-to-pixel display mapping
//! - Latency observation and per-session summaries
//! - The `CursorDriver` capability and its implementations
//! - The dispatcher that forwards pointer actions to a driver
//! - Screen geometry resolution (driver query + overrides)

pub mod dispatcher;
pub mod display;
pub mod driver;
#[cfg(feature = "enigo")]
pub mod enigo_driver;
pub mod error;
pub mod latency;
pub mod mapper;
pub mod smoothing;

pub use dispatcher::CursorActionDispatcher;
pub use display::resolve_geometry;
pub use driver::{CursorDriver, TracingDriver};
#[cfg(feature = "enigo")]
pub use enigo_driver::EnigoDriver;
pub use error::{ActionError, ActionResult};
pub use latency::{observe, LatencyMonitor, LatencyStats};
pub use mapper::{to_pixels, DisplayMapper};
pub use smoothing::{smooth, SmoothingFilter};
