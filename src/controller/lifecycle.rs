//! Connecting, reconnecting and shutting down.

use tracing::{debug, info, warn};

use super::{ConnectionStatus, SessionController};
use crate::client::{Client, ConnectParams, Timer};

/// Quit message for [`SessionController::jump_server`] when none is given.
pub const DEFAULT_JUMP_MESSAGE: &str = "Changing servers";
/// Quit message for [`SessionController::disconnect`] when none is given.
pub const DEFAULT_QUIT_MESSAGE: &str = "I'll be back!";
/// Quit message for [`SessionController::die`] when none is given.
pub const DEFAULT_DIE_MESSAGE: &str = "Bye, cruel world!";

impl SessionController {
    /// Connect to the first server in the rotation.
    ///
    /// A failed attempt is logged and retried on the next reconnect check.
    pub fn start<C: Client>(&mut self, client: &mut C) {
        if self.status == ConnectionStatus::Terminated {
            warn!("Not starting after shutdown");
            return;
        }
        if !self.connect(client) {
            self.arm_reconnect_check(client);
        }
    }

    /// Move to the next server, quitting the current one first if connected.
    ///
    /// Used by the reconnect check, and available to bot logic that wants to
    /// switch servers on command.
    pub fn jump_server<C: Client>(&mut self, client: &mut C, reason: &str) {
        if self.status == ConnectionStatus::Terminated {
            warn!("Not jumping servers after shutdown");
            return;
        }
        if !self.rotate_and_connect(client, reason) {
            self.arm_reconnect_check(client);
        }
    }

    /// Quit the server. The bot reconnects after the reconnection interval.
    pub fn disconnect<C: Client>(&mut self, client: &mut C, message: &str) {
        info!(message, "Disconnecting");
        client.disconnect(message);
    }

    /// Quit the server and stop reconnecting.
    pub fn shutdown<C: Client>(&mut self, client: &mut C, message: &str) {
        info!(message, "Shutting down");
        self.status = ConnectionStatus::Terminated;
        client.disconnect(message);
    }

    /// Quit the server and exit the process.
    pub fn die<C: Client>(mut self, client: &mut C, message: &str) -> ! {
        self.shutdown(client, message);
        std::process::exit(0)
    }

    /// Deliver a timer previously requested through [`Client::schedule`].
    pub fn on_timer<C: Client>(&mut self, client: &mut C, timer: Timer) {
        match timer {
            Timer::ReconnectCheck { generation } => self.check_connection(client, generation),
        }
    }

    fn check_connection<C: Client>(&mut self, client: &mut C, generation: u64) {
        if self.status == ConnectionStatus::Terminated {
            return;
        }
        if generation != self.state.reconnect_generation() {
            debug!(generation, "Ignoring superseded reconnect check");
            return;
        }
        if client.is_connected() {
            debug!("Reconnect check: still connected");
            return;
        }

        client.schedule(self.reconnection_delay, Timer::ReconnectCheck { generation });
        self.rotate_and_connect(client, DEFAULT_JUMP_MESSAGE);
    }

    fn rotate_and_connect<C: Client>(&mut self, client: &mut C, reason: &str) -> bool {
        if client.is_connected() {
            client.disconnect(reason);
        }
        self.servers.rotate();
        self.connect(client)
    }

    /// Try the server at the head of the rotation. Returns false on failure.
    fn connect<C: Client>(&mut self, client: &mut C) -> bool {
        let Some(server) = self.servers.current() else {
            warn!("No servers configured");
            self.status = ConnectionStatus::Disconnected;
            return false;
        };

        self.status = ConnectionStatus::Connecting;
        info!(server = %server, tls = self.use_tls, nick = %self.nickname, "Connecting");

        let params = ConnectParams {
            host: &server.host,
            port: server.port,
            nickname: &self.nickname,
            password: server.password.as_deref(),
            username: &self.username,
            realname: &self.realname,
            use_tls: self.use_tls,
        };
        match client.connect(&params) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Connection attempt failed");
                self.status = ConnectionStatus::Disconnected;
                false
            }
        }
    }

    /// Schedule a fresh reconnect check, superseding any outstanding one.
    pub(super) fn arm_reconnect_check<C: Client>(&mut self, client: &mut C) {
        let generation = self.state.next_reconnect_generation();
        debug!(
            generation,
            delay_secs = self.reconnection_delay.as_secs(),
            "Armed reconnect check"
        );
        client.schedule(self.reconnection_delay, Timer::ReconnectCheck { generation });
    }
}
