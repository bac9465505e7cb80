use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::configs::LoggingConfig;

/// Installs a global `tracing` subscriber for applications embedding the client.
///
/// `RUST_LOG` wins over the configured level. Returns `false` when a global
/// subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()
        .is_ok()
}

fn filter_directive(config: &LoggingConfig) -> String {
    let log_level = config.level.as_deref().unwrap_or("info");
    match config.filters.as_deref() {
        Some(filters) if !filters.is_empty() => format!("{},{}", log_level, filters),
        _ => log_level.to_string(),
    }
}
