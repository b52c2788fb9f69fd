//! Configuration loading and management.
//!
//! - [`types`]: the [`Config`] struct, TOML loading and derived values
//! - [`validation`]: collects every problem in a loaded config
//! - [`defaults`]: serde defaults and sentinels

mod defaults;
mod types;
mod validation;

pub use defaults::NEVER_RECONNECT;
pub use types::{Config, ConfigError};
pub use validation::ValidationError;
