//! RPL_NAMREPLY handling.

use tracing::debug;

use super::{SessionController, argument};
use crate::client::Event;
use crate::error::SessionResult;

/// Prefixes a server may put in front of a nick in a NAMES reply.
/// Only `@` and `+` are tracked.
const STATUS_PREFIXES: &[char] = &['@', '+', '%', '&', '~'];

impl SessionController {
    /// Record the members listed in one NAMES reply.
    ///
    /// Replies restate what JOIN already told us, so applying the same reply
    /// twice must leave the channel unchanged.
    pub(super) fn handle_namreply(&mut self, event: &Event) -> SessionResult {
        let channel_name = argument(event, 1)?;
        let names = argument(event, 2)?;
        let channel = self.state.channel_mut(channel_name)?;

        let mut seen = 0usize;
        for token in names.split_whitespace() {
            let nick = token.trim_start_matches(STATUS_PREFIXES);
            if nick.is_empty() {
                continue;
            }
            let prefixes = &token[..token.len() - nick.len()];

            channel.add_user(nick);
            if prefixes.contains('@') {
                channel.set_mode('o', Some(nick));
            }
            if prefixes.contains('+') {
                channel.set_mode('v', Some(nick));
            }
            seen += 1;
        }
        debug!(channel = channel_name, seen, "Processed NAMES reply");
        Ok(())
    }
}
