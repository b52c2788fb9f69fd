//! # slircbot
//!
//! Session state for a single-server IRC bot.
//!
//! The crate tracks which channels the bot is in, who is in each of them and
//! with what status, and which channel modes are set, from the stream of
//! protocol events the connection layer delivers. It also keeps the bot
//! connected, rotating through the configured servers after a disconnect.
//!
//! slircbot does no I/O. The embedding event loop implements
//! [`Client`](client::Client), feeds events to
//! [`SessionController::handle_event`] and timer expiries to
//! [`SessionController::on_timer`].
//!
//! ```no_run
//! use slircbot::{Config, SessionController};
//! # fn run<C: slircbot::client::Client>(client: &mut C) -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("slircbot.toml")?;
//! let mut bot = SessionController::new(config, client);
//! bot.start(client);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;

pub use client::{Client, Event, EventKind, Timer};
pub use config::Config;
pub use controller::{ConnectionStatus, SessionController, VERSION};
pub use error::{SessionError, StateError};
pub use state::{Channel, IrcMap, ServerRotation, ServerSpec};

pub use slircbot_proto::CaseMapping;
