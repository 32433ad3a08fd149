//! Prometheus metrics for the marketplace.
//!
//! All metrics follow the naming convention: `ec_<component>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Gauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // MARKETPLACE METRICS (ec-06)
    // =========================================================================

    /// Companies entering the marketplace
    pub static ref COMPANIES_CREATED: CounterVec = CounterVec::new(
        Opts::new("ec_market_companies_created_total", "Companies registered in the marketplace"),
        &["origin"]  // origin: top/user
    ).expect("metric creation failed");

    /// Resales
    pub static ref COMPANIES_TRANSFERRED: Counter = Counter::new(
        "ec_market_companies_transferred_total",
        "Total company resales"
    ).expect("metric creation failed");

    /// User-created company count
    pub static ref MARKET_COMPANY_COUNT: Gauge = Gauge::new(
        "ec_market_user_companies",
        "Number of user-created companies"
    ).expect("metric creation failed");

    /// Lucky-draw tickets by outcome
    pub static ref LUCKY_DRAWS: CounterVec = CounterVec::new(
        Opts::new("ec_market_lucky_draws_total", "Super-privilege lucky draws"),
        &["outcome"]  // outcome: won/lost
    ).expect("metric creation failed");

    /// Yield claims paid
    pub static ref TOKEN_CLAIMS: Counter = Counter::new(
        "ec_market_token_claims_total",
        "Total successful yield claims"
    ).expect("metric creation failed");

    /// Whole tokens paid out as yield
    pub static ref TOKENS_CLAIMED: Counter = Counter::new(
        "ec_market_tokens_claimed_total",
        "Whole tokens paid out by yield claims"
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Rejected operations by kind
    pub static ref REJECTED_OPERATIONS: CounterVec = CounterVec::new(
        Opts::new("ec_market_rejected_operations_total", "Rejected operations by error kind"),
        &["operation", "error_kind"]
    ).expect("metric creation failed");

    // =========================================================================
    // EVENT LOG METRICS
    // =========================================================================

    /// Events appended to the log
    pub static ref EVENTS_PUBLISHED: CounterVec = CounterVec::new(
        Opts::new("ec_eventlog_events_published_total", "Events appended to the event log"),
        &["event_type"]
    ).expect("metric creation failed");
}

/// Handle to the registered metrics.
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(COMPANIES_CREATED.clone()),
        Box::new(COMPANIES_TRANSFERRED.clone()),
        Box::new(MARKET_COMPANY_COUNT.clone()),
        Box::new(LUCKY_DRAWS.clone()),
        Box::new(TOKEN_CLAIMS.clone()),
        Box::new(TOKENS_CLAIMED.clone()),
        Box::new(REJECTED_OPERATIONS.clone()),
        Box::new(EVENTS_PUBLISHED.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
