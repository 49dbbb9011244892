//! Subscriber initialization
//!
//! Composes an `EnvFilter` with an optional stderr fmt layer on a `Registry`.

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

/// Initialize tracing with the given configuration
///
/// Returns an error if the log filter cannot be parsed or a global subscriber
/// is already installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(config.log_level.as_deref())?;

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.with_target)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        service.version = config.service_version.as_deref().unwrap_or("unknown"),
        "Tracing initialized"
    );

    Ok(())
}

/// Initialize with default configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter, ObservabilityError> {
    match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log level '{}': {}", level, e))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}
