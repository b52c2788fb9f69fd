//! The boundary to the connection and dispatch layer.
//!
//! slircbot does no I/O of its own. The object that owns the socket, decodes
//! lines into [`Event`]s and runs the event loop implements [`Client`]; the
//! [`SessionController`](crate::SessionController) drives it through this
//! trait and is fed events and timer expiries in return.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Priority the dispatcher assigns to handlers registered without one.
pub const DEFAULT_HANDLER_PRIORITY: i32 = 0;

/// Event kinds the session layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventKind {
    /// The transport closed.
    Disconnect,
    /// `JOIN`
    Join,
    /// `KICK`
    Kick,
    /// `MODE`
    Mode,
    /// `RPL_NAMREPLY` (353)
    NamReply,
    /// `NICK`
    Nick,
    /// `PART`
    Part,
    /// `QUIT`
    Quit,
    /// `RPL_WELCOME` (001): registration completed.
    Welcome,
}

impl EventKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disconnect => "disconnect",
            Self::Join => "join",
            Self::Kick => "kick",
            Self::Mode => "mode",
            Self::NamReply => "namreply",
            Self::Nick => "nick",
            Self::Part => "part",
            Self::Quit => "quit",
            Self::Welcome => "welcome",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded protocol event.
///
/// `source` is the raw `nick!user@host` origin. The meaning of `target` and
/// `arguments` depends on the kind (for `KICK`, `arguments[0]` is the victim;
/// for `RPL_NAMREPLY`, `arguments` is `[type, channel, names]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub source: String,
    pub target: String,
    pub arguments: Vec<String>,
}

impl Event {
    pub fn new(kind: EventKind, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }
}

/// Delayed callbacks the controller asks the event loop to deliver back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Check whether the bot is still disconnected and, if so, move on to the
    /// next server. Checks from an older generation are ignored.
    ReconnectCheck { generation: u64 },
}

/// Everything needed to open a connection and register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectParams<'a> {
    pub host: &'a str,
    pub port: u16,
    pub nickname: &'a str,
    pub password: Option<&'a str>,
    pub username: &'a str,
    pub realname: &'a str,
    pub use_tls: bool,
}

/// A connection attempt failed before the transport was up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not connect to {host}:{port}: {reason}")]
pub struct ConnectError {
    pub host: String,
    pub port: u16,
    pub reason: String,
}

/// The connection/dispatch layer as seen from the session controller.
pub trait Client {
    /// Route events of `kind` to the session controller. Handlers with a lower
    /// priority run first.
    fn add_global_handler(&mut self, kind: EventKind, priority: i32);

    /// Open a connection and send registration.
    fn connect(&mut self, params: &ConnectParams<'_>) -> Result<(), ConnectError>;

    /// Send `QUIT :message` and close the transport.
    fn disconnect(&mut self, message: &str);

    /// Deliver `timer` back to the controller after `delay`.
    fn schedule(&mut self, delay: Duration, timer: Timer);

    fn is_connected(&self) -> bool;

    /// The nickname the server currently knows the bot by.
    fn nickname(&self) -> &str;
}
