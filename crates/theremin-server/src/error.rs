//! Session error types.

use theremin_action::ActionError;
use thiserror::Error;
use tonic::{Code, Status};

pub type SessionOutcome<T> = Result<T, SessionError>;

/// Why a stream session ended in failure.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Inbound read failed (reset, malformed frame, client cancel).
    #[error("Transport error: {0}")]
    Transport(Status),

    /// The cursor driver refused an action.
    #[error("Action dispatch failed: {0}")]
    Dispatch(#[from] ActionError),
}

impl SessionError {
    /// True when the stream itself failed rather than the pointer.
    pub fn is_transport(&self) -> bool {
        matches!(self, SessionError::Transport(_))
    }

    /// Short label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionError::Transport(_) => "transport",
            SessionError::Dispatch(_) => "dispatch",
        }
    }
}

impl From<Status> for SessionError {
    fn from(status: Status) -> Self {
        Self::Transport(status)
    }
}

impl From<SessionError> for Status {
    fn from(err: SessionError) -> Self {
        match err {
            // Propagated to the caller unchanged
            SessionError::Transport(status) => status,
            SessionError::Dispatch(action) => {
                let code = match &action {
                    ActionError::PermissionDenied(_) => Code::PermissionDenied,
                    ActionError::DisplayUnavailable(_) => Code::Unavailable,
                    ActionError::Driver(_) => Code::Internal,
                };
                Status::new(code, action.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status_passes_through() {
        let err = SessionError::from(Status::data_loss("frame truncated"));
        assert!(err.is_transport());
        let status: Status = err.into();
        assert_eq!(status.code(), Code::DataLoss);
        assert_eq!(status.message(), "frame truncated");
    }

    #[test]
    fn test_dispatch_errors_map_to_codes() {
        let cases = [
            (ActionError::permission_denied("no"), Code::PermissionDenied),
            (ActionError::display_unavailable("no"), Code::Unavailable),
            (ActionError::driver("no"), Code::Internal),
        ];
        for (action, code) in cases {
            let err = SessionError::from(action);
            assert_eq!(err.kind(), "dispatch");
            assert_eq!(Status::from(err).code(), code);
        }
    }
}
