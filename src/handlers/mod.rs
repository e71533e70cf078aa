//! Bot command dispatch.
//!
//! Handlers never touch the connection. They return [`Effect`]s and the
//! session applies them, so every reply goes out through `Session::say`.
//!
//! Two tiers are evaluated per command:
//! - [`admin`]: only when the invoking user owns the channel
//! - [`public`]: always, independent of the admin tier

mod admin;
mod public;

use dwarfbot_proto::{AliasSet, BotCommand, ChatMessage};
use tracing::{debug, info};

/// Something a handler wants the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post `text` to `channel`.
    Say { channel: String, text: String },
    /// Part, disconnect and end the process.
    Shutdown,
}

impl Effect {
    pub fn say(channel: &str, text: impl Into<String>) -> Self {
        Effect::Say {
            channel: channel.to_string(),
            text: text.into(),
        }
    }
}

/// Routes bot commands to handlers.
///
/// Built once per session from configuration and never mutated.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    name: String,
    channels: Vec<String>,
    aliases: AliasSet,
}

impl Dispatcher {
    pub fn new(name: impl Into<String>, channels: Vec<String>, aliases: AliasSet) -> Self {
        Self {
            name: name.into(),
            channels,
            aliases,
        }
    }

    /// The bot's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names the bot answers to.
    pub fn aliases(&self) -> &AliasSet {
        &self.aliases
    }

    /// Configured channels, in join order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Extract a command addressed to this bot, if `msg` is one.
    pub fn decode(&self, msg: &ChatMessage) -> Option<BotCommand> {
        BotCommand::parse(msg, &self.aliases)
    }

    /// Decide what to do about `cmd`. Unknown commands yield no effects.
    pub fn dispatch(&self, cmd: &BotCommand) -> Vec<Effect> {
        let mut effects = Vec::new();

        if is_channel_owner(cmd) {
            info!(user = %cmd.user, channel = %cmd.channel, "Received orders from the boss...");
            if let Some(admin_effects) = admin::handle(cmd) {
                effects.extend(admin_effects);
            }
        }

        match public::handle(self, cmd) {
            Some(public_effects) => effects.extend(public_effects),
            None if effects.is_empty() => {
                debug!(command = %cmd.name, user = %cmd.user, "Ignoring unrecognized command");
            }
            None => {}
        }

        effects
    }
}

/// On Twitch the channel owner's login is the channel name.
fn is_channel_owner(cmd: &BotCommand) -> bool {
    cmd.user == cmd.channel
}
