//! Inbound line decoding.
//!
//! Twitch sends many line types (capability acks, MOTD, JOIN/PART echoes,
//! numerics). The bot acts on two: the server keep-alive and channel chat.
//! Everything else decodes to `None`.

use std::sync::OnceLock;

use regex::Regex;

/// The literal keep-alive line Twitch sends.
pub const SERVER_PING: &str = "PING :tmi.twitch.tv";

/// A chat line posted to a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Login of the user who sent the message.
    pub sender: String,
    /// Channel name as sent by the server, without the leading `#`.
    pub channel: String,
    /// Message body; empty when the line carried no trailing text.
    pub text: String,
}

/// A decoded line the bot cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    /// Server keep-alive; must be answered with a PONG.
    ServerPing,
    /// A chat message in a joined channel.
    ChatMessage(ChatMessage),
}

impl ChatEvent {
    /// Decode a single protocol line (terminator already stripped).
    ///
    /// Returns `None` for lines the bot does not act on.
    pub fn parse(line: &str) -> Option<ChatEvent> {
        if line == SERVER_PING {
            return Some(ChatEvent::ServerPing);
        }

        let caps = privmsg_regex()?.captures(line)?;
        Some(ChatEvent::ChatMessage(ChatMessage {
            sender: caps.get(1)?.as_str().to_string(),
            channel: caps.get(2)?.as_str().to_string(),
            text: caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }))
    }
}

/// `:<sender>!<ident>@<host> PRIVMSG #<channel>[ :<text>]`
fn privmsg_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^:(\w+)!\w+@[\w.\-]+ PRIVMSG #(\w+)(?: :(.*))?$").ok())
        .as_ref()
}
