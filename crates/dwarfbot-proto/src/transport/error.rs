//! Transport error types.

use thiserror::Error;

use crate::error::ProtocolError;

/// Errors raised by a [`LineTransport`](super::LineTransport).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Dialing the server failed.
    #[error("failed to connect to {addr}: {source}")]
    Connection {
        /// `host:port` that was dialed.
        addr: String,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The peer closed the stream, or the transport was already closed.
    #[error("stream closed")]
    StreamClosed,

    /// Reading a line failed.
    #[error("read failed: {0}")]
    Read(#[source] ProtocolError),

    /// Writing a line failed.
    #[error("write failed: {0}")]
    Write(#[source] ProtocolError),
}

impl TransportError {
    /// True when the error ends the current connection.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, Self::StreamClosed | Self::Read(_))
    }
}
