//! Commands anyone in chat may use.

use std::sync::OnceLock;

use super::{Dispatcher, Effect};
use dwarfbot_proto::BotCommand;
use regex::Regex;

const HEYO_REPLY: &str = "Heyo, yourself boy-o!";
const PONG_REPLY: &str = "Ach! I dunnae own 'n Atari, but nevertheless: \"Pong\"";

/// Returns `None` when `cmd` is not a public command.
pub(super) fn handle(dispatcher: &Dispatcher, cmd: &BotCommand) -> Option<Vec<Effect>> {
    let text = match cmd.name.as_str() {
        "ping" => ping(&cmd.args),
        "channels" => channels(dispatcher),
        _ => return None,
    };
    Some(vec![Effect::say(&cmd.channel, text)])
}

fn ping(args: &[String]) -> String {
    let greeted = args.iter().any(|arg| arg.eq_ignore_ascii_case("heyo"))
        || heyo_regex().is_some_and(|re| args.iter().any(|arg| re.is_match(arg)));

    if greeted {
        HEYO_REPLY.to_string()
    } else {
        PONG_REPLY.to_string()
    }
}

fn channels(dispatcher: &Dispatcher) -> String {
    let mut msg = format!("Aye, I like ta hang about here: {}", dispatcher.name());
    for channel in dispatcher.channels() {
        msg.push(' ');
        msg.push_str(channel);
    }
    msg
}

fn heyo_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)heyo.+").ok()).as_ref()
}
