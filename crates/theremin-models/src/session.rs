//! Stream session identity, lifecycle and terminal result.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one connected sensor stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generate a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session lifecycle: `Idle -> Streaming -> Closed*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Constructed, no message received yet
    #[default]
    Idle,
    /// At least one point received, stream still open
    Streaming,
    /// Clean end of input
    ClosedSuccess,
    /// Transport or dispatch failure
    ClosedFailure,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Streaming => "streaming",
            SessionState::ClosedSuccess => "closed_success",
            SessionState::ClosedFailure => "closed_failure",
        }
    }

    /// Check if the session reached a terminal state.
    pub fn is_closed(&self) -> bool {
        matches!(self, SessionState::ClosedSuccess | SessionState::ClosedFailure)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal value returned to the remote caller on clean close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub success: bool,
    pub message: String,
}

impl SessionResult {
    pub const ENDED_NORMALLY: &'static str = "Stream ended normally";

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// The result returned when the sensor closes its stream cleanly.
    pub fn ended_normally() -> Self {
        Self::success(Self::ENDED_NORMALLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
        assert_eq!(SessionId::from_string("abc").as_str(), "abc");
    }

    #[test]
    fn test_state_closed() {
        assert!(!SessionState::Idle.is_closed());
        assert!(!SessionState::Streaming.is_closed());
        assert!(SessionState::ClosedSuccess.is_closed());
        assert!(SessionState::ClosedFailure.is_closed());
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn test_state_serde_snake_case() {
        let json = serde_json::to_string(&SessionState::ClosedFailure).unwrap();
        assert_eq!(json, "\"closed_failure\"");
    }

    #[test]
    fn test_ended_normally() {
        let result = SessionResult::ended_normally();
        assert!(result.success);
        assert_eq!(result.message, "Stream ended normally");
    }
}
