//! The list of servers the bot cycles through.

use std::collections::VecDeque;
use std::fmt;

use serde::Deserialize;

/// One candidate server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSpec {
    /// Hostname or IP address.
    pub host: String,
    /// Port, usually 6667 (plain) or 6697 (TLS).
    pub port: u16,
    /// Server password (`PASS`), if required.
    #[serde(default)]
    pub password: Option<String>,
}

impl ServerSpec {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl fmt::Display for ServerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Ordered server list. The head is the server to (re)connect to; the only
/// mutation is moving the head to the tail.
#[derive(Debug, Clone, Default)]
pub struct ServerRotation {
    servers: VecDeque<ServerSpec>,
}

impl ServerRotation {
    pub fn new(servers: impl IntoIterator<Item = ServerSpec>) -> Self {
        Self {
            servers: servers.into_iter().collect(),
        }
    }

    /// The server the next connection attempt goes to.
    pub fn current(&self) -> Option<&ServerSpec> {
        self.servers.front()
    }

    /// Move the current server to the back of the list and return the new head.
    pub fn rotate(&mut self) -> Option<&ServerSpec> {
        if let Some(head) = self.servers.pop_front() {
            self.servers.push_back(head);
        }
        self.servers.front()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServerSpec> {
        self.servers.iter()
    }
}
