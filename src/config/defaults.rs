//! Default values for configuration.

use std::time::Duration;

/// Stand-in delay for a disabled reconnection interval (2^31 seconds).
pub const NEVER_RECONNECT: Duration = Duration::from_secs(1 << 31);

pub fn default_reconnection_interval() -> i64 {
    60
}
