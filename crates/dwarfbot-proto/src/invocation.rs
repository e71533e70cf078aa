//! Bot command extraction from chat text.
//!
//! A viewer addresses the bot as `!<alias> <command> [args...]`. The alias
//! must be one the bot answers to; anything else is chat, not a command.

use std::sync::OnceLock;

use regex::Regex;

use crate::event::ChatMessage;

/// Names the bot answers to, compared case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasSet {
    names: Vec<String>,
}

impl AliasSet {
    /// Build an alias set. Names are lowercased; duplicates are dropped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.as_ref().to_lowercase();
            if !name.is_empty() && !set.names.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    /// Whether `token` names this bot.
    pub fn contains(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.names.iter().any(|n| *n == token)
    }

    /// Iterate the aliases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no alias is configured, in which case nothing is a command.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A command invocation addressed to this bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotCommand {
    /// Command name, lowercased.
    pub name: String,
    /// Whitespace-split arguments, in order.
    pub args: Vec<String>,
    /// Login of the invoking user.
    pub user: String,
    /// Channel the invocation came from.
    pub channel: String,
}

impl BotCommand {
    /// Extract a command from `msg` if its leading `!<alias>` names this bot.
    pub fn parse(msg: &ChatMessage, aliases: &AliasSet) -> Option<BotCommand> {
        let caps = invocation_regex()?.captures(&msg.text)?;

        if !aliases.contains(caps.get(1)?.as_str()) {
            return None;
        }

        Some(BotCommand {
            name: caps.get(2)?.as_str().to_lowercase(),
            args: caps
                .get(3)
                .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            user: msg.sender.clone(),
            channel: msg.channel.clone(),
        })
    }
}

/// `!<alias> <command> <free-form args>`
fn invocation_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^!(\w+)\s*(\w+)\s*(.*)").ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> ChatMessage {
        ChatMessage {
            sender: "viewer".to_string(),
            channel: "hammerdwarf".to_string(),
            text: text.to_string(),
        }
    }

    fn aliases() -> AliasSet {
        AliasSet::new(["hammerdwarfbot", "dwarfbot"])
    }

    #[test]
    fn test_alias_set_normalizes() {
        let set = AliasSet::new(["DwarfBot", "dwarfbot", ""]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("DWARFBOT"));
        assert!(!set.contains("hammerdwarfbot"));
    }

    #[test]
    fn test_parse_command_with_args() {
        let cmd = BotCommand::parse(&msg("!dwarfbot ping heyo there"), &aliases()).unwrap();
        assert_eq!(cmd.name, "ping");
        assert_eq!(cmd.args, vec!["heyo", "there"]);
        assert_eq!(cmd.user, "viewer");
        assert_eq!(cmd.channel, "hammerdwarf");
    }

    #[test]
    fn test_parse_lowercases_name_and_alias() {
        let cmd = BotCommand::parse(&msg("!HammerDwarfBot CHANNELS"), &aliases()).unwrap();
        assert_eq!(cmd.name, "channels");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_args_split_on_runs_of_whitespace() {
        let cmd = BotCommand::parse(&msg("!dwarfbot ping   a \t b  "), &aliases()).unwrap();
        assert_eq!(cmd.args, vec!["a", "b"]);
    }

    #[test]
    fn test_other_bot_ignored() {
        assert_eq!(BotCommand::parse(&msg("!nightbot ping heyo"), &aliases()), None);
    }

    #[test]
    fn test_not_a_command() {
        assert_eq!(BotCommand::parse(&msg("dwarfbot ping"), &aliases()), None);
        assert_eq!(BotCommand::parse(&msg("hello !dwarfbot ping"), &aliases()), None);
        assert_eq!(BotCommand::parse(&msg(""), &aliases()), None);
    }

    #[test]
    fn test_empty_alias_set_matches_nothing() {
        assert_eq!(BotCommand::parse(&msg("!dwarfbot ping"), &AliasSet::default()), None);
    }
}
