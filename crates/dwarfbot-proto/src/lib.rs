//! # dwarfbot-proto
//!
//! Protocol plumbing for a Twitch chat bot speaking plain IRC.
//!
//! ## Features
//!
//! - CRLF line framing for tokio ([`LineCodec`])
//! - A line transport over TCP or any async stream ([`LineTransport`])
//! - Decoding of inbound lines into [`ChatEvent`]s
//! - Encoding of the handful of outbound commands a chat bot needs ([`Command`])
//! - Extraction of `!<alias> <command> <args>` invocations ([`BotCommand`])
//!
//! ## Quick Start
//!
//! ```rust
//! use dwarfbot_proto::{AliasSet, BotCommand, ChatEvent, Command};
//!
//! let out = Command::privmsg("hammerdwarf", "Hello, world!");
//! assert_eq!(out.to_string(), "PRIVMSG #hammerdwarf :Hello, world!");
//!
//! let line = ":viewer!viewer@viewer.tmi.twitch.tv PRIVMSG #hammerdwarf :!dwarfbot ping heyo";
//! let aliases = AliasSet::new(["dwarfbot"]);
//! if let Some(ChatEvent::ChatMessage(msg)) = ChatEvent::parse(line) {
//!     let cmd = BotCommand::parse(&msg, &aliases).expect("addressed to us");
//!     assert_eq!(cmd.name, "ping");
//!     assert_eq!(cmd.args, vec!["heyo".to_string()]);
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod event;
pub mod invocation;
#[cfg(feature = "tokio")]
pub mod line;
#[cfg(feature = "tokio")]
pub mod transport;

pub use self::command::{Command, TWITCH_HOST};
pub use self::error::{ProtocolError, Result};
pub use self::event::{ChatEvent, ChatMessage, SERVER_PING};
pub use self::invocation::{AliasSet, BotCommand};

#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
#[cfg(feature = "tokio")]
pub use self::transport::{
    Connector, LineTransport, TcpConnector, TransportError, MAX_IRC_LINE_LEN,
};
