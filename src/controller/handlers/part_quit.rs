//! PART and QUIT event handling.

use slircbot_proto::nick_of;
use tracing::{debug, info};

use super::SessionController;
use crate::client::Event;
use crate::error::SessionResult;

impl SessionController {
    pub(super) fn handle_part(&mut self, me: &str, event: &Event) -> SessionResult {
        let nick = nick_of(&event.source);
        let channel = event.target.as_str();

        if self.is_me(me, nick) {
            self.state.close_channel(channel)?;
            info!(channel, "Left channel");
            return Ok(());
        }

        debug!(channel, nick, "User parted");
        self.state.channel_mut(channel)?.remove_user(nick);
        Ok(())
    }

    /// A quit removes the nick from every channel we share with it.
    pub(super) fn handle_quit(&mut self, event: &Event) {
        let nick = nick_of(&event.source);
        for channel in self.state.channels_mut() {
            if channel.has_user(nick) {
                channel.remove_user(nick);
            }
        }
        debug!(nick, "User quit");
    }
}
