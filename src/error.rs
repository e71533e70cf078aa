//! Error handling for the bot session.

use dwarfbot_proto::TransportError;
use thiserror::Error;

/// Errors raised by the session loop and its outbound helpers.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No server host configured; startup cannot proceed.
    #[error("IRC server must be specified")]
    MissingServer,

    /// No port configured; startup cannot proceed.
    #[error("IRC port must be specified")]
    MissingPort,

    /// Refused to send an empty chat message.
    #[error("msg was empty")]
    EmptyMessage,

    /// Connection-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SessionError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingServer => "missing_server",
            Self::MissingPort => "missing_port",
            Self::EmptyMessage => "empty_message",
            Self::Transport(_) => "transport",
        }
    }

    /// True for misconfiguration that must stop the process before any dial.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingServer | Self::MissingPort)
    }
}

/// Result type for session operations.
pub type SessionResult<T = ()> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SessionError::MissingServer.error_code(), "missing_server");
        assert_eq!(SessionError::EmptyMessage.error_code(), "empty_message");
        assert_eq!(
            SessionError::from(TransportError::StreamClosed).error_code(),
            "transport"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(SessionError::MissingServer.is_fatal());
        assert!(SessionError::MissingPort.is_fatal());
        assert!(!SessionError::EmptyMessage.is_fatal());
        assert!(!SessionError::from(TransportError::StreamClosed).is_fatal());
    }

    #[test]
    fn test_transport_display_passes_through() {
        let err = SessionError::from(TransportError::StreamClosed);
        assert_eq!(err.to_string(), "stream closed");
    }
}
