//! MODE event handling.
//!
//! Only channel modes are tracked. The mode string and its parameters arrive
//! in `event.arguments` and are decoded into deltas before any is applied, so
//! a malformed change leaves the channel untouched.

use slircbot_proto::{ChannelExt, ModeSign, decode_channel_modes};
use tracing::debug;

use super::SessionController;
use crate::client::Event;
use crate::error::SessionResult;

impl SessionController {
    pub(super) fn handle_mode(&mut self, event: &Event) -> SessionResult {
        let target = event.target.as_str();
        if !target.is_channel_name() {
            debug!(target, "Ignoring user mode change");
            return Ok(());
        }

        let pieces: Vec<&str> = event.arguments.iter().map(String::as_str).collect();
        let deltas = decode_channel_modes(&pieces)?;
        let channel = self.state.channel_mut(target)?;

        for delta in &deltas {
            let argument = delta.argument.as_deref();
            match delta.sign {
                ModeSign::Set => channel.set_mode(delta.letter, argument),
                ModeSign::Clear => channel.clear_mode(delta.letter, argument),
            }
        }
        debug!(channel = target, changes = deltas.len(), "Applied mode change");
        Ok(())
    }
}
