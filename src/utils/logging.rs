//! Structured logging and secret-redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the command-line
//! harness, and keeps the SYSTRAN API key (which travels in the query
//! string) out of log output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{ProviderError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs.
/// - `pretty` (default): Human-readable output for development.
///
/// `RUST_LOG` takes precedence over the configured level. A library host
/// that already installed a subscriber should skip this call.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| ProviderError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Replaces the value of every `key=` query parameter with `[REDACTED]`.
///
/// # Arguments
///
/// * `input` - A URL or log line that may carry the API key.
///
/// # Returns
///
/// A new string with all key values masked.
pub fn sanitize(input: &str) -> String {
    const MARKER: &str = "key=";

    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(MARKER) {
        let is_param = pos == 0 || matches!(rest.as_bytes()[pos - 1], b'?' | b'&');
        let value_start = pos + MARKER.len();
        result.push_str(&rest[..value_start]);

        if is_param {
            let value_end = rest[value_start..]
                .find(|c: char| c == '&' || c == '#' || c.is_whitespace())
                .map(|i| value_start + i)
                .unwrap_or(rest.len());
            if value_end > value_start {
                result.push_str("[REDACTED]");
            }
            rest = &rest[value_end..];
        } else {
            rest = &rest[value_start..];
        }
    }
    result.push_str(rest);

    result
}
