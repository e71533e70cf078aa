//! Shared test infrastructure for integration tests.
//!
//! The bot binary is spawned against a fake chat server listening on
//! `127.0.0.1:0`; tests drive the server side line by line.

#![allow(dead_code)]

pub mod bot;
pub mod server;

pub use bot::BotProcess;
pub use server::{BotConnection, FakeIrcServer};

/// A chat line as Twitch would relay it.
pub fn privmsg_from(user: &str, channel: &str, text: &str) -> String {
    format!(
        ":{user}!{user}@{user}.tmi.twitch.tv PRIVMSG #{channel} :{text}",
        user = user,
        channel = channel,
        text = text
    )
}
