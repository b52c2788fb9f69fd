//! Recording fake client.
//!
//! Implements [`Client`] without any network: every call is recorded so
//! tests can assert on what the controller asked for.

use std::collections::HashSet;
use std::time::Duration;

use slircbot::client::{Client, ConnectError, ConnectParams, EventKind, Timer};

/// One `connect` call, with borrowed parameters copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectAttempt {
    pub host: String,
    pub port: u16,
    pub nickname: String,
    pub password: Option<String>,
    pub use_tls: bool,
}

/// A [`Client`] that records every call made on it.
#[derive(Debug, Default)]
pub struct FakeClient {
    pub nickname: String,
    pub connected: bool,
    pub handlers: Vec<(EventKind, i32)>,
    pub attempts: Vec<ConnectAttempt>,
    pub quits: Vec<String>,
    pub scheduled: Vec<(Duration, Timer)>,
    /// Hosts whose `connect` fails.
    pub unreachable: HashSet<String>,
}

#[allow(dead_code)]
impl FakeClient {
    pub fn new(nickname: &str) -> Self {
        Self {
            nickname: nickname.to_string(),
            ..Self::default()
        }
    }

    /// Make connection attempts to `host` fail.
    pub fn refuse(&mut self, host: &str) {
        self.unreachable.insert(host.to_string());
    }

    /// Simulate the transport dropping without a `disconnect` call.
    pub fn drop_connection(&mut self) {
        self.connected = false;
    }

    pub fn last_attempt(&self) -> Option<&ConnectAttempt> {
        self.attempts.last()
    }

    /// The most recently scheduled timer.
    pub fn last_timer(&self) -> Option<Timer> {
        self.scheduled.last().map(|(_, timer)| *timer)
    }

    /// Generations of every scheduled reconnect check, in order.
    pub fn timer_generations(&self) -> Vec<u64> {
        self.scheduled
            .iter()
            .map(|(_, Timer::ReconnectCheck { generation })| *generation)
            .collect()
    }
}

impl Client for FakeClient {
    fn add_global_handler(&mut self, kind: EventKind, priority: i32) {
        self.handlers.push((kind, priority));
    }

    fn connect(&mut self, params: &ConnectParams<'_>) -> Result<(), ConnectError> {
        self.attempts.push(ConnectAttempt {
            host: params.host.to_string(),
            port: params.port,
            nickname: params.nickname.to_string(),
            password: params.password.map(str::to_string),
            use_tls: params.use_tls,
        });

        if self.unreachable.contains(params.host) {
            self.connected = false;
            return Err(ConnectError {
                host: params.host.to_string(),
                port: params.port,
                reason: "connection refused".to_string(),
            });
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self, message: &str) {
        self.quits.push(message.to_string());
        self.connected = false;
    }

    fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.scheduled.push((delay, timer));
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn nickname(&self) -> &str {
        &self.nickname
    }
}
