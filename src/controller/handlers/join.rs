//! JOIN event handling.

use slircbot_proto::nick_of;
use tracing::{debug, info};

use super::SessionController;
use crate::client::Event;
use crate::error::SessionResult;

impl SessionController {
    /// Our own join opens a fresh channel; anyone else's adds a member.
    pub(super) fn handle_join(&mut self, me: &str, event: &Event) -> SessionResult {
        let nick = nick_of(&event.source);
        let channel = event.target.as_str();

        if self.is_me(me, nick) {
            info!(channel, "Joined channel");
            self.state.open_channel(channel).add_user(nick);
            return Ok(());
        }

        debug!(channel, nick, "User joined");
        self.state.channel_mut(channel)?.add_user(nick);
        Ok(())
    }
}
