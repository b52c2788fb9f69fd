//! NICK event handling.

use slircbot_proto::nick_of;
use tracing::debug;

use super::SessionController;
use crate::client::Event;

impl SessionController {
    pub(super) fn handle_nick(&mut self, event: &Event) {
        let before = nick_of(&event.source);
        let after = event.target.as_str();

        let mut renamed = 0usize;
        for channel in self.state.channels_mut() {
            if channel.has_user(before) {
                channel.rename_user(before, after);
                renamed += 1;
            }
        }
        debug!(before, after, channels = renamed, "Nick change");
    }
}
