//! Line transport for async I/O.
//!
//! [`LineTransport`] owns one connection and moves whole protocol lines
//! across it. [`Connector`] is the seam that produces transports: the
//! default [`TcpConnector`] dials TCP, tests hand out in-memory streams.
//!
//! ```ignore
//! use dwarfbot_proto::{Command, Connector, TcpConnector};
//!
//! let mut transport = TcpConnector.connect("irc.chat.twitch.tv", 6667).await?;
//! transport.send(&Command::nick("dwarfbot")).await?;
//! let line = transport.read_line().await?;
//! transport.close().await;
//! ```

mod error;
mod framed;

pub use error::TransportError;
pub use framed::{Connector, LineTransport, TcpConnector};

/// Maximum line length accepted from the server, terminator included.
pub const MAX_IRC_LINE_LEN: usize = 8191;
