//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when both are present. Fails if
/// a global subscriber is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if !config.console_output {
        return registry
            .try_init()
            .map_err(|e| TelemetryError::TracingInit(e.to_string()));
    }

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        registry
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::TracingInit(e.to_string()))
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);
        registry
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::TracingInit(e.to_string()))
    }
}
