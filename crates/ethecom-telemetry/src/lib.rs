//! # Ethecom Telemetry
//!
//! Logging and metrics for the marketplace components.
//!
//! ## Components
//!
//! - **Logs**: `tracing` events rendered by `tracing-subscriber`, pretty for
//!   development or JSON for log shippers
//! - **Metrics**: Prometheus counters in a process-wide registry, scraped via
//!   [`encode_metrics`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ethecom_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `EC_JSON_LOGS` | `false` | Emit JSON lines |
//! | `EC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `EC_NETWORK` | `devnet` | Network label attached to startup log |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, MetricsHandle, COMPANIES_CREATED, COMPANIES_TRANSFERRED,
    EVENTS_PUBLISHED, LUCKY_DRAWS, MARKET_COMPANY_COUNT, REJECTED_OPERATIONS, TOKENS_CLAIMED,
    TOKEN_CLAIMS,
};
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed (e.g. one is already set).
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Invalid log filter or other configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Installs the tracing subscriber and registers all metrics.
///
/// Hold the returned guard for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    init_tracing(&config)?;
    tracing::info!(
        service = %config.service_name,
        network = %config.network,
        "Telemetry initialized"
    );
    Ok(TelemetryGuard { _metrics: metrics })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
