//! IRC case-mapping functions.
//!
//! IRC compares nicknames and channel names case-insensitively, and under the
//! classic `rfc1459` mapping some punctuation is folded as well (`[` and `{`
//! are the same character). Servers advertise which rule they use through the
//! `CASEMAPPING` ISUPPORT token; [`CaseMapping`] models the three common ones.

use std::fmt;
use std::str::FromStr;

/// A casemapping rule, as advertised by `CASEMAPPING=<name>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CaseMapping {
    /// Only `A-Z` fold to `a-z`.
    Ascii,
    /// `A-Z` plus `[]\~` fold to `a-z` plus `{}|^`.
    #[default]
    Rfc1459,
    /// `A-Z` plus `[]\` fold to `a-z` plus `{}|`; `~` and `^` stay distinct.
    StrictRfc1459,
}

impl CaseMapping {
    /// Fold a single character to its lowercase representative.
    #[inline]
    pub const fn fold_char(self, c: char) -> char {
        match (self, c) {
            (_, 'A'..='Z') => (c as u8 + 32) as char,
            (Self::Ascii, _) => c,
            (_, '[') => '{',
            (_, ']') => '}',
            (_, '\\') => '|',
            (Self::Rfc1459, '~') => '^',
            _ => c,
        }
    }

    /// Fold a whole identifier. Equivalent identifiers fold to the same string.
    pub fn fold(self, s: &str) -> String {
        s.chars().map(|c| self.fold_char(c)).collect()
    }

    /// Compare two identifiers under this mapping without allocating.
    pub fn equivalent(self, a: &str, b: &str) -> bool {
        if a.len() != b.len() {
            return false;
        }

        a.chars()
            .zip(b.chars())
            .all(|(ca, cb)| self.fold_char(ca) == self.fold_char(cb))
    }

    /// The ISUPPORT token value for this mapping.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Rfc1459 => "rfc1459",
            Self::StrictRfc1459 => "strict-rfc1459",
        }
    }
}

impl fmt::Display for CaseMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `CASEMAPPING` value is not one of the supported rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported casemapping: {0}")]
pub struct UnknownCaseMapping(pub String);

impl FromStr for CaseMapping {
    type Err = UnknownCaseMapping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Self::Ascii),
            "rfc1459" => Ok(Self::Rfc1459),
            "strict-rfc1459" => Ok(Self::StrictRfc1459),
            other => Err(UnknownCaseMapping(other.to_string())),
        }
    }
}
