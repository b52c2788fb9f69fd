//! Whole-session state: the channel directory and reconnect bookkeeping.

use slircbot_proto::CaseMapping;

use super::{Channel, IrcMap};
use crate::error::StateError;

/// Everything the bot knows about its current session.
///
/// Owned by the [`SessionController`](crate::SessionController). The channel
/// directory is dropped wholesale on disconnect; the reconnect generation
/// survives so that older timers can recognise they were superseded.
#[derive(Debug, Clone)]
pub struct SessionState {
    channels: IrcMap<Channel>,
    /// Bumped every time a fresh reconnect check is armed.
    reconnect_generation: u64,
}

impl SessionState {
    pub fn new(casemapping: CaseMapping) -> Self {
        Self {
            channels: IrcMap::with_casemapping(casemapping),
            reconnect_generation: 0,
        }
    }

    pub fn casemapping(&self) -> CaseMapping {
        self.channels.casemapping()
    }

    pub fn channels(&self) -> &IrcMap<Channel> {
        &self.channels
    }

    pub fn channel(&self, name: &str) -> Result<&Channel, StateError> {
        self.channels
            .get(name)
            .ok_or_else(|| StateError::ChannelNotFound(name.to_string()))
    }

    pub fn channel_mut(&mut self, name: &str) -> Result<&mut Channel, StateError> {
        self.channels
            .get_mut(name)
            .ok_or_else(|| StateError::ChannelNotFound(name.to_string()))
    }

    /// Start tracking a channel from scratch, discarding any stale entry.
    pub fn open_channel(&mut self, name: &str) -> &mut Channel {
        let casemapping = self.casemapping();
        self.channels
            .insert_entry(name, Channel::with_casemapping(casemapping))
    }

    pub fn close_channel(&mut self, name: &str) -> Result<Channel, StateError> {
        self.channels
            .remove(name)
            .ok_or_else(|| StateError::ChannelNotFound(name.to_string()))
    }

    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut Channel> {
        self.channels.values_mut()
    }

    /// Forget every channel (used on disconnect).
    pub fn reset_channels(&mut self) {
        self.channels = IrcMap::with_casemapping(self.casemapping());
    }

    pub fn reconnect_generation(&self) -> u64 {
        self.reconnect_generation
    }

    /// Arm a new reconnect check, superseding any outstanding one.
    pub fn next_reconnect_generation(&mut self) -> u64 {
        self.reconnect_generation += 1;
        self.reconnect_generation
    }
}
