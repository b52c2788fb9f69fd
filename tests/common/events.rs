//! Event constructors mirroring what a server sends.

#![allow(dead_code)]

use slircbot::{Event, EventKind};

/// `nick!nick@host.example`
pub fn mask(nick: &str) -> String {
    format!("{nick}!{nick}@host.example")
}

pub fn welcome() -> Event {
    Event::new(EventKind::Welcome, "alpha.example.net", "slircbot")
}

pub fn disconnect() -> Event {
    Event::new(EventKind::Disconnect, "alpha.example.net", "")
}

pub fn join(nick: &str, channel: &str) -> Event {
    Event::new(EventKind::Join, mask(nick), channel)
}

pub fn part(nick: &str, channel: &str) -> Event {
    Event::new(EventKind::Part, mask(nick), channel).with_arguments(["leaving"])
}

pub fn kick(by: &str, channel: &str, victim: &str) -> Event {
    Event::new(EventKind::Kick, mask(by), channel).with_arguments([victim, "out"])
}

pub fn quit(nick: &str) -> Event {
    Event::new(EventKind::Quit, mask(nick), "").with_arguments(["Quit: bye"])
}

pub fn nick(before: &str, after: &str) -> Event {
    Event::new(EventKind::Nick, mask(before), after)
}

/// `MODE target <pieces...>`
pub fn mode(by: &str, target: &str, pieces: &[&str]) -> Event {
    Event::new(EventKind::Mode, mask(by), target).with_arguments(pieces.iter().copied())
}

/// `353 slircbot = <channel> :<names>`
pub fn names(channel: &str, names: &str) -> Event {
    Event::new(EventKind::NamReply, "alpha.example.net", "slircbot")
        .with_arguments(["=", channel, names])
}
