//! Error types for pointer actions.

use thiserror::Error;

/// Result type for pointer actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors raised by a cursor driver.
///
/// None of these are recoverable mid-session; the session that hit one is torn down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Display unavailable: {0}")]
    DisplayUnavailable(String),

    #[error("Pointer control denied: {0}")]
    PermissionDenied(String),

    #[error("Cursor driver failed: {0}")]
    Driver(String),
}

impl ActionError {
    pub fn display_unavailable(msg: impl Into<String>) -> Self {
        Self::DisplayUnavailable(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    pub fn driver(msg: impl Into<String>) -> Self {
        Self::Driver(msg.into())
    }

    /// Short label for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionError::DisplayUnavailable(_) => "display_unavailable",
            ActionError::PermissionDenied(_) => "permission_denied",
            ActionError::Driver(_) => "driver",
        }
    }
}
