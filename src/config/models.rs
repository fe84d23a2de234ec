//! Configuration data structures for the SYSTRAN 8 provider.
//!
//! The settings file is written by the host tool's users and follows the
//! host's PascalCase naming (`Url`, `Key`); lowercase spellings are accepted
//! as well.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Connection settings for the SYSTRAN 8 server.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the server, e.g. `https://systran.example.com/`.
    #[serde(rename = "Url", alias = "url", default)]
    pub url: String,

    /// API key registered on the server.
    #[serde(rename = "Key", alias = "key", default)]
    pub key: ApiKey,

    /// Translation profile id sent with every translate call.
    /// Default: none (empty `profile=` parameter)
    #[serde(rename = "Profile", alias = "profile", default)]
    pub profile: Option<String>,

    /// Whole-request timeout in seconds.
    /// Default: `300`
    #[serde(rename = "TimeoutSeconds", alias = "timeoutseconds", default = "default_timeout")]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds.
    /// Default: `10`
    #[serde(
        rename = "ConnectTimeoutSeconds",
        alias = "connecttimeoutseconds",
        default = "default_connect_timeout"
    )]
    pub connect_timeout_seconds: u64,
}

impl ServerSettings {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: ApiKey::new(key),
            profile: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

// Custom Debug impl that never logs the key
impl std::fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerSettings")
            .field("url", &self.url)
            .field("key", &self.key)
            .field("profile", &self.profile)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}

/// SYSTRAN API key, wiped from memory on drop.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str("[REDACTED]")
        }
    }
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_timeout() -> u64 {
    300
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
