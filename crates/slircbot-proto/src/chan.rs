//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Channel type prefixes accepted when a server does not advertise `CHANTYPES`.
pub const DEFAULT_CHANTYPES: &str = "#&+!";

/// Extension trait for telling channel targets apart from nickname targets.
pub trait ChannelExt {
    /// True if this target names a channel under the default `CHANTYPES`.
    fn is_channel_name(&self) -> bool {
        self.is_channel_name_with(DEFAULT_CHANTYPES)
    }

    /// True if this target is longer than its prefix and starts with one of
    /// `chantypes`.
    fn is_channel_name_with(&self, chantypes: &str) -> bool;
}

impl ChannelExt for str {
    fn is_channel_name_with(&self, chantypes: &str) -> bool {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => chantypes.contains(first) && chars.next().is_some(),
            None => false,
        }
    }
}

impl ChannelExt for String {
    fn is_channel_name_with(&self, chantypes: &str) -> bool {
        self.as_str().is_channel_name_with(chantypes)
    }
}
