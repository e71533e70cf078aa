//! Framed line transport over TCP or any async byte stream.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::ProtocolError;
use crate::line::LineCodec;

use super::error::TransportError;

/// One connection to the chat server, exchanging whole lines.
///
/// The stream is owned exclusively; once [`close`](Self::close) runs, reads
/// report [`TransportError::StreamClosed`] and writes fail.
#[derive(Debug)]
pub struct LineTransport<S = TcpStream> {
    framed: Option<Framed<S, LineCodec>>,
    peer: String,
}

impl<S> LineTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already-connected stream. `peer` is used for logging only.
    pub fn new(stream: S, peer: impl Into<String>) -> Self {
        Self {
            framed: Some(Framed::new(stream, LineCodec::default())),
            peer: peer.into(),
        }
    }

    /// The `host:port` (or label) this transport talks to.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Wait for the next complete line, terminator stripped.
    pub async fn read_line(&mut self) -> Result<String, TransportError> {
        let framed = self.framed.as_mut().ok_or(TransportError::StreamClosed)?;
        match framed.next().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(TransportError::Read(e)),
            None => Err(TransportError::StreamClosed),
        }
    }

    /// Write one line; the terminator is appended and the line flushed.
    pub async fn write_line(&mut self, line: impl Into<String>) -> Result<(), TransportError> {
        let framed = self.framed.as_mut().ok_or_else(|| {
            TransportError::Write(ProtocolError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "transport closed",
            )))
        })?;
        framed.send(line.into()).await.map_err(TransportError::Write)
    }

    /// Serialize and write an outbound command.
    pub async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        self.write_line(command.to_string()).await
    }

    /// Release the stream. Safe to call more than once.
    pub async fn close(&mut self) {
        if let Some(framed) = self.framed.take() {
            let mut stream = framed.into_inner();
            if let Err(e) = stream.shutdown().await {
                debug!(peer = %self.peer, error = %e, "shutdown on close failed");
            }
        }
    }
}

impl LineTransport<TcpStream> {
    /// Wrap a connected TCP stream, enabling TCP keepalive.
    pub fn tcp(stream: TcpStream, peer: impl Into<String>) -> Self {
        if let Err(e) = enable_keepalive(&stream) {
            warn!("failed to enable TCP keepalive: {}", e);
        }
        Self::new(stream, peer)
    }
}

fn enable_keepalive(stream: &TcpStream) -> std::io::Result<()> {
    use socket2::{SockRef, TcpKeepalive};
    use std::time::Duration;

    let sock = SockRef::from(stream);
    let keepalive = TcpKeepalive::new()
        .with_time(Duration::from_secs(120))
        .with_interval(Duration::from_secs(30));

    sock.set_tcp_keepalive(&keepalive)
}

/// Produces fresh transports. One call is one dial attempt; retry policy
/// belongs to the caller.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Stream type the produced transports run over.
    type Stream: AsyncRead + AsyncWrite + Unpin + Send;

    /// Dial `host:port`.
    async fn connect(
        &self,
        host: &str,
        port: u16,
    ) -> Result<LineTransport<Self::Stream>, TransportError>;
}

/// Plain TCP dialer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(&self, host: &str, port: u16) -> Result<LineTransport, TransportError> {
        let addr = format!("{}:{}", host, port);
        let stream = TcpStream::connect((host, port))
            .await
            .map_err(|source| TransportError::Connection {
                addr: addr.clone(),
                source,
            })?;
        Ok(LineTransport::tcp(stream, addr))
    }
}
