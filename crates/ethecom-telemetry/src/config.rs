//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for logging output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a directive list)
    pub log_level: String,

    /// Whether to write logs to stdout
    pub console_output: bool,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Network identifier (devnet, testnet, mainnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "ethecom".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "devnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EC_SERVICE_NAME`: Service name (default: ethecom)
    /// - `EC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `EC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `EC_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `EC_NETWORK`: Network name (default: devnet)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("EC_SERVICE_NAME").unwrap_or_else(|_| "ethecom".to_string()),

            log_level: env::var("EC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("EC_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("EC_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            network: env::var("EC_NETWORK").unwrap_or_else(|_| "devnet".to_string()),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}
