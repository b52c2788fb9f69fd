//! KICK event handling.

use tracing::{debug, info};

use super::{SessionController, argument};
use crate::client::Event;
use crate::error::SessionResult;

impl SessionController {
    pub(super) fn handle_kick(&mut self, me: &str, event: &Event) -> SessionResult {
        let kicked = argument(event, 0)?;
        let channel = event.target.as_str();

        if self.is_me(me, kicked) {
            self.state.close_channel(channel)?;
            info!(channel, by = %event.source, "Kicked from channel");
            return Ok(());
        }

        debug!(channel, nick = kicked, "User kicked");
        self.state.channel_mut(channel)?.remove_user(kicked);
        Ok(())
    }
}
