//! Commands reserved for the channel owner.

use super::Effect;
use dwarfbot_proto::BotCommand;

const FAREWELL: &str = "Yah, boss! Shuttin' 'er doon!";

/// Returns `None` when `cmd` is not an admin command.
pub(super) fn handle(cmd: &BotCommand) -> Option<Vec<Effect>> {
    match cmd.name.as_str() {
        "shutdown" => Some(vec![Effect::say(&cmd.channel, FAREWELL), Effect::Shutdown]),
        _ => None,
    }
}
