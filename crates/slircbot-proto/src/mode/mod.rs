//! Channel mode deltas.
//!
//! A `MODE #channel +ov-l alice bob` line changes several modes at once. The
//! tokenizer in [`parse`] turns its parameters into one [`ModeDelta`] per
//! letter, in the order the server listed them.
//!
//! # Reference
//! - RFC 2811 Section 4: Channel Modes
//! - Modern IRC documentation: <https://modern.ircdocs.horse/#channel-modes>

mod parse;

use std::fmt;

pub use self::parse::decode_channel_modes;

/// Whether a mode is being added or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeSign {
    /// `+`
    Set,
    /// `-`
    Clear,
}

impl ModeSign {
    /// Map a modifier character to a sign.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Set),
            '-' => Some(Self::Clear),
            _ => None,
        }
    }

    /// The modifier character for this sign.
    pub const fn as_char(self) -> char {
        match self {
            Self::Set => '+',
            Self::Clear => '-',
        }
    }
}

/// A single mode change: sign, letter, and the argument it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeDelta {
    /// Set or clear.
    pub sign: ModeSign,
    /// The mode letter, e.g. `o` or `k`.
    pub letter: char,
    /// The parameter consumed by this letter, if any.
    pub argument: Option<String>,
}

impl ModeDelta {
    /// Build a delta that sets `letter`.
    pub fn set(letter: char, argument: Option<&str>) -> Self {
        Self {
            sign: ModeSign::Set,
            letter,
            argument: argument.map(str::to_owned),
        }
    }

    /// Build a delta that clears `letter`.
    pub fn clear(letter: char, argument: Option<&str>) -> Self {
        Self {
            sign: ModeSign::Clear,
            letter,
            argument: argument.map(str::to_owned),
        }
    }
}

impl fmt::Display for ModeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign.as_char(), self.letter)?;
        if let Some(arg) = &self.argument {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Returns true if `letter` consumes a parameter when applied with `sign`.
///
/// List modes (`b e I q`), member prefixes (`o v h a`) and the key (`k`)
/// always carry a parameter. The limit (`l`) only carries one when set.
pub const fn takes_argument(sign: ModeSign, letter: char) -> bool {
    match letter {
        'b' | 'e' | 'I' | 'q' | 'o' | 'v' | 'h' | 'a' | 'k' => true,
        'l' => matches!(sign, ModeSign::Set),
        _ => false,
    }
}
