//! State management module.
//!
//! Contains the casefolded identifier map and the channel/session state built
//! on top of it.

mod channel;
mod ircmap;
mod rotation;
mod session;

pub use channel::Channel;
pub use ircmap::IrcMap;
pub use rotation::{ServerRotation, ServerSpec};
pub use session::SessionState;
