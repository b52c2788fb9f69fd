//! Session event handlers.
//!
//! Each submodule handles a category of [`Event`] and applies it to the
//! [`SessionController`](super::SessionController)'s state.

use super::SessionController;
use crate::client::{Client, Event, EventKind};
use crate::error::{SessionError, SessionResult};

mod connection;
mod join;
mod kick;
mod modes;
mod names;
mod nick;
mod part_quit;

impl SessionController {
    /// Apply one event delivered by the dispatcher.
    ///
    /// Errors end handling of this event only; the state stays as it was
    /// before the failing step.
    pub fn handle_event<C: Client>(&mut self, client: &mut C, event: &Event) -> SessionResult {
        match event.kind {
            EventKind::Disconnect => {
                self.handle_disconnect(client);
                Ok(())
            }
            EventKind::Welcome => {
                self.handle_welcome(&*client);
                Ok(())
            }
            EventKind::Join => self.handle_join(client.nickname(), event),
            EventKind::Kick => self.handle_kick(client.nickname(), event),
            EventKind::Mode => self.handle_mode(event),
            EventKind::NamReply => self.handle_namreply(event),
            EventKind::Nick => {
                self.handle_nick(event);
                Ok(())
            }
            EventKind::Part => self.handle_part(client.nickname(), event),
            EventKind::Quit => {
                self.handle_quit(event);
                Ok(())
            }
        }
    }
}

/// Fetch `event.arguments[index]`.
fn argument(event: &Event, index: usize) -> Result<&str, SessionError> {
    event
        .arguments
        .get(index)
        .map(String::as_str)
        .ok_or(SessionError::MissingArgument {
            event: event.kind,
            index,
        })
}
