//! Registration and transport loss.

use tracing::{debug, info};

use super::SessionController;
use crate::client::Client;
use crate::controller::ConnectionStatus;

impl SessionController {
    pub(super) fn handle_welcome<C: Client>(&mut self, client: &C) {
        info!(nick = %client.nickname(), "Registered");
        if self.status != ConnectionStatus::Terminated {
            self.status = ConnectionStatus::Connected;
        }
    }

    /// Forget all channels and schedule a check for the next server.
    pub(super) fn handle_disconnect<C: Client>(&mut self, client: &mut C) {
        let dropped = self.state.channels().len();
        self.state.reset_channels();

        if self.status == ConnectionStatus::Terminated {
            debug!(dropped, "Disconnected after shutdown");
            return;
        }

        info!(dropped, "Disconnected");
        self.status = ConnectionStatus::Disconnected;
        self.arm_reconnect_check(client);
    }
}
