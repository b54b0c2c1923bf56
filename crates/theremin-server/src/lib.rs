//! Gaze stream action service.
//!
//! This crate provides:
//! - The `eyetracker.EyeTracker` client-streaming gRPC service
//! - Per-connection stream sessions driving the cursor pipeline
//! - Environment configuration with lenient fallbacks
//! - Tracing setup and Prometheus metrics

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod proto;
pub mod service;
pub mod session;

pub use config::{PipelineConfig, ServerConfig};
pub use error::{SessionError, SessionOutcome};
pub use logging::SessionLogger;
pub use service::EyeTrackerService;
pub use session::GazeStreamSession;
