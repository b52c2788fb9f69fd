//! The session controller.
//!
//! [`SessionController`] owns the channel directory and the server rotation.
//! It registers itself with the dispatcher for the events that change session
//! state, applies each one as it arrives, and runs the reconnect cycle:
//!
//! ```text
//! ┌──────────────┐  start / jump   ┌────────────┐  RPL_WELCOME  ┌───────────┐
//! │ Disconnected ├────────────────►│ Connecting ├──────────────►│ Connected │
//! └──────▲───────┘                 └─────┬──────┘               └─────┬─────┘
//!        │       connect error           │                            │
//!        └───────────────────────────────┘◄───────── disconnect ──────┘
//!        │
//!        └── reconnect check fires while still disconnected: rotate servers, jump
//! ```
//!
//! `shutdown`/`die` move to `Terminated`, after which nothing reconnects.

mod handlers;
mod lifecycle;

pub use lifecycle::{DEFAULT_DIE_MESSAGE, DEFAULT_JUMP_MESSAGE, DEFAULT_QUIT_MESSAGE};

use std::time::Duration;

use slircbot_proto::CaseMapping;

use crate::client::{Client, EventKind};
use crate::config::Config;
use crate::error::StateError;
use crate::state::{Channel, IrcMap, ServerRotation, SessionState};

/// Priority the controller registers its handlers at. Lower runs first, so
/// user handlers at [`DEFAULT_HANDLER_PRIORITY`](crate::client::DEFAULT_HANDLER_PRIORITY)
/// see already-updated state.
pub const SESSION_HANDLER_PRIORITY: i32 = -10;

/// Events the controller subscribes to.
pub const HANDLED_EVENTS: [EventKind; 9] = [
    EventKind::Disconnect,
    EventKind::Join,
    EventKind::Kick,
    EventKind::Mode,
    EventKind::NamReply,
    EventKind::Nick,
    EventKind::Part,
    EventKind::Quit,
    EventKind::Welcome,
];

/// Answer to CTCP VERSION.
pub const VERSION: &str = concat!("slircbot ", env!("CARGO_PKG_VERSION"));

/// Where the controller is in the connect/reconnect cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    /// A connection was opened; registration has not completed yet.
    Connecting,
    Connected,
    /// Shut down on request; no further reconnects.
    Terminated,
}

/// Tracks channels and members for one bot and keeps it connected.
#[derive(Debug)]
pub struct SessionController {
    nickname: String,
    username: String,
    realname: String,
    use_tls: bool,
    reconnection_delay: Duration,
    servers: ServerRotation,
    state: SessionState,
    status: ConnectionStatus,
}

impl SessionController {
    /// Build a controller from `config` and subscribe it to `client`'s events.
    pub fn new<C: Client>(config: Config, client: &mut C) -> Self {
        let reconnection_delay = config.reconnection_delay();
        let username = config.username().to_string();
        let realname = config.realname().to_string();

        let controller = Self {
            nickname: config.nickname,
            username,
            realname,
            use_tls: config.use_tls,
            reconnection_delay,
            servers: ServerRotation::new(config.servers),
            state: SessionState::new(config.casemapping),
            status: ConnectionStatus::Disconnected,
        };
        controller.register(client);
        controller
    }

    fn register<C: Client>(&self, client: &mut C) {
        for kind in HANDLED_EVENTS {
            client.add_global_handler(kind, SESSION_HANDLER_PRIORITY);
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn rotation(&self) -> &ServerRotation {
        &self.servers
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn casemapping(&self) -> CaseMapping {
        self.state.casemapping()
    }

    pub fn reconnection_delay(&self) -> Duration {
        self.reconnection_delay
    }

    /// Channels the bot is in, keyed by name.
    pub fn channels(&self) -> &IrcMap<Channel> {
        self.state.channels()
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.state.channels().keys()
    }

    /// Look up a channel the bot is in.
    pub fn channel(&self, name: &str) -> Result<&Channel, StateError> {
        self.state.channel(name)
    }

    pub fn is_on_channel(&self, name: &str) -> bool {
        self.state.channels().contains_key(name)
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    fn is_me(&self, me: &str, nick: &str) -> bool {
        self.casemapping().equivalent(me, nick)
    }
}
