//! Configuration for observability/telemetry

use serde::{Deserialize, Serialize};

const DEFAULT_SERVICE_NAME: &str = "kiro-bridge";

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded on startup
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Service version (optional)
    #[serde(default)]
    pub service_version: Option<String>,

    /// Enable console/log output on stderr
    #[serde(default = "default_enable_console")]
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "debug", "kiro_bridge=trace")
    /// Falls back to `RUST_LOG`, then "info", if not set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Include targets in console output
    #[serde(default)]
    pub with_target: bool,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

fn default_enable_console() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            service_version: None,
            enable_console: true,
            log_level: None,
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set service version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` or `SERVICE_NAME` → service_name
    /// - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` → service_version
    /// - `OTEL_LOG_LEVEL` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |a: &str, b: &str| lookup(a).or_else(|| lookup(b));

        Self {
            service_name: first("OTEL_SERVICE_NAME", "SERVICE_NAME")
                .unwrap_or_else(default_service_name),
            service_version: first("OTEL_SERVICE_VERSION", "SERVICE_VERSION"),
            enable_console: true,
            log_level: first("OTEL_LOG_LEVEL", "RUST_LOG"),
            with_target: false,
        }
    }
}
