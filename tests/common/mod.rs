//! Integration test common infrastructure.
//!
//! Provides a recording [`FakeClient`] that stands in for the connection
//! layer, plus constructors for the events a server would deliver.

pub mod client;
pub mod events;

use slircbot::{Config, ServerSpec, SessionController};

#[allow(unused_imports)]
pub use client::FakeClient;

pub const BOT_NICK: &str = "slircbot";

/// Install a `tracing` subscriber so `RUST_LOG=debug cargo test` shows the
/// controller's logs. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Three servers in rotation order: `alpha`, `beta`, `gamma`.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config::new(
        BOT_NICK,
        [
            ServerSpec::new("alpha.example.net", 6667),
            ServerSpec::new("beta.example.net", 6667),
            ServerSpec::new("gamma.example.net", 6697).with_password("hunter2"),
        ],
    )
}

/// A started controller that has completed registration with `alpha`.
#[allow(dead_code)]
pub fn connected_bot() -> (SessionController, FakeClient) {
    init_tracing();
    let mut client = FakeClient::new(BOT_NICK);
    let mut bot = SessionController::new(test_config(), &mut client);
    bot.start(&mut client);
    bot.handle_event(&mut client, &events::welcome())
        .expect("welcome is always accepted");
    (bot, client)
}

/// A connected bot that has joined `channel`.
#[allow(dead_code)]
pub fn bot_in(channel: &str) -> (SessionController, FakeClient) {
    let (mut bot, mut client) = connected_bot();
    bot.handle_event(&mut client, &events::join(BOT_NICK, channel))
        .expect("self join");
    (bot, client)
}
