//! # slircbot-proto
//!
//! Protocol helpers shared by the slircbot session core.
//!
//! ## Features
//!
//! - IRC casemapping (`ascii`, `rfc1459`, `strict-rfc1459`)
//! - Channel name detection
//! - Message source (`nick!user@host`) splitting
//! - Channel `MODE` tokenizing into typed [`ModeDelta`] records
//!
//! ## Quick Start
//!
//! ```rust
//! use slircbot_proto::{decode_channel_modes, CaseMapping, ModeSign};
//!
//! assert!(CaseMapping::Rfc1459.equivalent("Nick[away]", "nick{AWAY}"));
//!
//! let deltas = decode_channel_modes(&["+o-v", "alice", "bob"]).unwrap();
//! assert_eq!(deltas[0].sign, ModeSign::Set);
//! assert_eq!(deltas[1].argument.as_deref(), Some("bob"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod chan;
pub mod error;
pub mod mode;
pub mod source;

pub use self::casemap::{CaseMapping, UnknownCaseMapping};
pub use self::chan::ChannelExt;
pub use self::error::ModeParseError;
pub use self::mode::{decode_channel_modes, ModeDelta, ModeSign};
pub use self::source::{nick_of, Source};
