//! Tracing setup and structured session logging.

use theremin_models::SessionId;
use tracing::{error, info, Span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with colored output for dev, JSON when `LOG_FORMAT=json`.
pub fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("theremin=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

/// Session logger with consistent structured fields.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    session_id: String,
    peer: String,
}

impl SessionLogger {
    /// Create a logger for one session; an unknown peer logs as `unknown`.
    pub fn new(session_id: &SessionId, peer: Option<std::net::SocketAddr>) -> Self {
        Self {
            session_id: session_id.to_string(),
            peer: peer.map_or_else(|| "unknown".to_string(), |p| p.to_string()),
        }
    }

    /// Log that a sensor opened a stream.
    pub fn log_connected(&self, driver: &str) {
        info!(
            session_id = %self.session_id,
            peer = %self.peer,
            driver,
            "Vision sensor connected to the stream"
        );
    }

    /// Log a clean end of stream with the session's latency summary.
    pub fn log_closed(&self, points: u64, mean_latency_ms: Option<f64>, max_latency_ms: Option<i64>) {
        info!(
            session_id = %self.session_id,
            peer = %self.peer,
            points,
            mean_latency_ms,
            max_latency_ms,
            "Vision sensor disconnected cleanly"
        );
    }

    /// Log a session torn down by a transport or driver error.
    pub fn log_failed(&self, points: u64, kind: &str, message: &str) {
        error!(
            session_id = %self.session_id,
            peer = %self.peer,
            points,
            kind,
            "Stream session failed: {}", message
        );
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Span wrapping the whole session.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "gaze_session",
            session_id = %self.session_id,
            peer = %self.peer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_logger_fields() {
        let id = SessionId::from_string("s-1");
        let logger = SessionLogger::new(&id, Some("127.0.0.1:5000".parse().unwrap()));
        assert_eq!(logger.session_id(), "s-1");
        assert_eq!(logger.peer(), "127.0.0.1:5000");

        let anonymous = SessionLogger::new(&id, None);
        assert_eq!(anonymous.peer(), "unknown");
    }
}
