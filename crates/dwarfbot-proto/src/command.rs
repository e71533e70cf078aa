//! Outbound IRC commands.
//!
//! Only the commands a Twitch chat bot sends are modelled. Each serializes
//! to a single protocol line without its `\r\n` terminator; framing is the
//! job of [`LineCodec`](crate::LineCodec).

use std::fmt;

/// Host name Twitch uses in its keep-alive exchange.
pub const TWITCH_HOST: &str = "tmi.twitch.tv";

/// An outgoing IRC command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `PASS oauth:<token>`
    Pass(String),
    /// `NICK <name>`
    Nick(String),
    /// `JOIN #<channel>`, channel lowercased.
    Join(String),
    /// `PART #<channel>`, channel lowercased.
    Part(String),
    /// `PRIVMSG #<channel> :<text>`
    Privmsg {
        /// Channel name without the leading `#`.
        channel: String,
        /// Message body.
        text: String,
    },
    /// `PONG :tmi.twitch.tv`
    Pong,
}

impl Command {
    /// Authenticate with an OAuth token. An `oauth:` prefix on `token` is
    /// tolerated and not doubled.
    pub fn pass(token: &str) -> Self {
        Command::Pass(token.strip_prefix("oauth:").unwrap_or(token).to_string())
    }

    /// Set the bot's nickname.
    pub fn nick(name: &str) -> Self {
        Command::Nick(name.to_string())
    }

    /// Join a channel. Twitch requires channel logins in lowercase.
    pub fn join(channel: &str) -> Self {
        Command::Join(bare_channel(channel).to_lowercase())
    }

    /// Leave a channel.
    pub fn part(channel: &str) -> Self {
        Command::Part(bare_channel(channel).to_lowercase())
    }

    /// Send `text` to `channel`.
    pub fn privmsg(channel: &str, text: &str) -> Self {
        Command::Privmsg {
            channel: bare_channel(channel).to_string(),
            text: text.to_string(),
        }
    }

    /// Reply to a server keep-alive.
    pub fn pong() -> Self {
        Command::Pong
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pass(token) => write!(f, "PASS oauth:{}", token),
            Command::Nick(name) => write!(f, "NICK {}", name),
            Command::Join(channel) => write!(f, "JOIN #{}", channel),
            Command::Part(channel) => write!(f, "PART #{}", channel),
            Command::Privmsg { channel, text } => write!(f, "PRIVMSG #{} :{}", channel, text),
            Command::Pong => write!(f, "PONG :{}", TWITCH_HOST),
        }
    }
}

fn bare_channel(channel: &str) -> &str {
    channel.strip_prefix('#').unwrap_or(channel)
}
