//! Unified error handling for slircbot.
//!
//! State lookups fail with [`StateError`]; event handling wraps those together
//! with protocol decoding failures in [`SessionError`]. Idempotent operations
//! (re-adding a member, clearing an unset mode) never produce an error.

use slircbot_proto::ModeParseError;
use thiserror::Error;

use crate::client::EventKind;

// ============================================================================
// State Errors (directory and map lookups)
// ============================================================================

/// Lookup failures on session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no such key: {0}")]
    KeyNotFound(String),

    #[error("not on channel: {0}")]
    ChannelNotFound(String),
}

// ============================================================================
// Session Errors (event handling)
// ============================================================================

/// Errors that abort handling of a single event.
///
/// The session controller never swallows these: an event that references an
/// unknown channel, or carries a mode string that cannot be decoded, means the
/// event stream was not what the state model expects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("invalid mode change: {0}")]
    Mode(#[from] ModeParseError),

    #[error("{event} event is missing argument {index}")]
    MissingArgument { event: EventKind, index: usize },
}

impl SessionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::State(StateError::KeyNotFound(_)) => "key_not_found",
            Self::State(StateError::ChannelNotFound(_)) => "channel_not_found",
            Self::Mode(_) => "invalid_mode",
            Self::MissingArgument { .. } => "missing_argument",
        }
    }
}

/// Result type for event handlers.
pub type SessionResult = Result<(), SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_codes() {
        let err: SessionError = StateError::ChannelNotFound("#test".into()).into();
        assert_eq!(err.error_code(), "channel_not_found");

        let err = SessionError::MissingArgument {
            event: EventKind::Kick,
            index: 0,
        };
        assert_eq!(err.error_code(), "missing_argument");
    }

    #[test]
    fn test_display() {
        let err: SessionError = StateError::ChannelNotFound("#test".into()).into();
        assert_eq!(err.to_string(), "not on channel: #test");

        let err = SessionError::MissingArgument {
            event: EventKind::NamReply,
            index: 2,
        };
        assert_eq!(err.to_string(), "namreply event is missing argument 2");

        let err: SessionError = ModeParseError::MissingModeModifier("o".into()).into();
        assert_eq!(err.to_string(), "invalid mode change: missing mode modifier in \"o\"");
    }
}
