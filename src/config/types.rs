//! Core configuration types and loading.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use slircbot_proto::CaseMapping;
use thiserror::Error;

use super::defaults::{NEVER_RECONNECT, default_reconnection_interval};
use super::validation::{ValidationError, validate};
use crate::state::ServerSpec;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Nickname to register with.
    pub nickname: String,
    /// Username (ident). Defaults to the nickname.
    #[serde(default)]
    pub username: Option<String>,
    /// Real name / GECOS. Defaults to the nickname.
    #[serde(default)]
    pub realname: Option<String>,
    /// Seconds to wait after a disconnect before trying the next server.
    /// Zero or negative disables reconnection in practice.
    #[serde(default = "default_reconnection_interval")]
    pub reconnection_interval: i64,
    /// Whether to connect with TLS.
    #[serde(default)]
    pub use_tls: bool,
    /// Casemapping used for nickname and channel comparisons.
    #[serde(default)]
    pub casemapping: CaseMapping,
    /// Servers to rotate through, in order.
    #[serde(default, rename = "server")]
    pub servers: Vec<ServerSpec>,
}

impl Config {
    /// A configuration with defaults for everything but identity and servers.
    pub fn new(nickname: impl Into<String>, servers: impl IntoIterator<Item = ServerSpec>) -> Self {
        Self {
            nickname: nickname.into(),
            username: None,
            realname: None,
            reconnection_interval: default_reconnection_interval(),
            use_tls: false,
            casemapping: CaseMapping::default(),
            servers: servers.into_iter().collect(),
        }
    }

    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Check the configuration, returning every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self).map_err(ConfigError::Invalid)
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.nickname)
    }

    pub fn realname(&self) -> &str {
        self.realname.as_deref().unwrap_or(&self.nickname)
    }

    /// The delay before a reconnect check, with non-positive values mapped to
    /// a delay long enough to never fire in practice.
    pub fn reconnection_delay(&self) -> Duration {
        match u64::try_from(self.reconnection_interval) {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => NEVER_RECONNECT,
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL: &str = r#"
nickname = "slircbot"
username = "bot"
realname = "Straylight Bot"
reconnection_interval = 30
use_tls = true
casemapping = "strict-rfc1459"

[[server]]
host = "irc.example.net"
port = 6697
password = "hunter2"

[[server]]
host = "backup.example.net"
port = 6667
"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = FULL.parse().unwrap();
        assert_eq!(config.nickname, "slircbot");
        assert_eq!(config.username(), "bot");
        assert_eq!(config.realname(), "Straylight Bot");
        assert_eq!(config.reconnection_delay(), Duration::from_secs(30));
        assert!(config.use_tls);
        assert_eq!(config.casemapping, CaseMapping::StrictRfc1459);
        assert_eq!(config.servers.len(), 2);
        assert_eq!(config.servers[0].password.as_deref(), Some("hunter2"));
        assert_eq!(config.servers[1].password, None);
    }

    #[test]
    fn test_defaults() {
        let config: Config = r#"
nickname = "bot"

[[server]]
host = "irc.example.net"
port = 6667
"#
        .parse()
        .unwrap();
        assert_eq!(config.username(), "bot");
        assert_eq!(config.realname(), "bot");
        assert_eq!(config.reconnection_delay(), Duration::from_secs(60));
        assert!(!config.use_tls);
        assert_eq!(config.casemapping, CaseMapping::Rfc1459);
    }

    #[test]
    fn test_non_positive_interval_never_fires() {
        let mut config = Config::new("bot", [ServerSpec::new("irc.example.net", 6667)]);
        config.reconnection_interval = 0;
        assert_eq!(config.reconnection_delay(), NEVER_RECONNECT);
        config.reconnection_interval = -5;
        assert_eq!(config.reconnection_delay(), NEVER_RECONNECT);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = "nickname = \"\"".parse::<Config>().unwrap_err();
        match err {
            ConfigError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.servers[0].host, "irc.example.net");

        assert!(matches!(
            Config::load("/nonexistent/slircbot.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
