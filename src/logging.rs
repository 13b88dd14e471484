//! # Structured Logging Module
//!
//! Environment-aware structured logging for allocation runs. Console output is
//! human readable by default and switches to JSON lines when requested, so a
//! run can be piped into log tooling without changing the binary.

use std::sync::OnceLock;

use chrono::Utc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize logging with an explicit default level and output format.
///
/// `RUST_LOG` still wins over `default_level` when it is set.
pub fn init_logging(default_level: &str, json: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

        let console_layer = if json {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // Try to initialize, but don't panic if a global subscriber already exists
        if tracing_subscriber::registry()
            .with(console_layer)
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::debug!(
            pid = std::process::id(),
            environment = %environment,
            json = json,
            "Structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
pub fn get_environment() -> String {
    resolve_environment(
        std::env::var("COHORT_ENV").ok(),
        std::env::var("APP_ENV").ok(),
    )
}

/// `COHORT_ENV` wins over `APP_ENV`; neither set means development.
pub fn resolve_environment(cohort_env: Option<String>, app_env: Option<String>) -> String {
    cohort_env
        .or(app_env)
        .unwrap_or_else(|| "development".to_string())
        .to_lowercase()
}

/// Log structured data for allocation runs
pub fn log_allocation_operation(
    operation: &str,
    records: usize,
    groups: usize,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        records = records,
        groups = groups,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "ALLOCATION_OPERATION"
    );
}

/// Log structured data for roster loading
pub fn log_roster_operation(
    operation: &str,
    source: &str,
    records: usize,
    dropped: usize,
    status: &str,
) {
    tracing::info!(
        operation = %operation,
        source = %source,
        records = records,
        dropped = dropped,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "ROSTER_OPERATION"
    );
}

/// Log structured data for report output
pub fn log_report_operation(operation: &str, destination: &str, format: &str, status: &str) {
    tracing::info!(
        operation = %operation,
        destination = %destination,
        format = %format,
        status = %status,
        timestamp = %Utc::now().to_rfc3339(),
        "REPORT_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}
