//! Error types for the protocol helpers.

use thiserror::Error;

/// Errors raised while tokenizing a channel `MODE` parameter list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModeParseError {
    /// The mode string does not start with `+` or `-`.
    #[error("missing mode modifier in {0:?}")]
    MissingModeModifier(String),

    /// A `+` or `-` was not followed by any mode letter.
    #[error("dangling mode modifier: {modifier}")]
    DanglingModifier {
        /// The modifier left without a letter.
        modifier: char,
    },
}
