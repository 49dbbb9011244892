//! KiroBridge Observability - tracing setup shared by the bridge binaries
//!
//! This crate installs a `tracing-subscriber` registry with an `EnvFilter`
//! and a console layer, and provides small helpers for conversion spans.
//!
//! # Features
//!
//! - Configurable via environment variables or programmatic API
//! - Console logging to stderr, so stdout stays free for command output
//! - Reusable span macro for conversion runs
//!
//! # Quick Start
//!
//! ```no_run
//! use kirobridge_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("kiro-bridge")
//!     .with_version(env!("CARGO_PKG_VERSION"))
//!     .with_log_level("debug");
//!
//! init(config).unwrap();
//!
//! tracing::info!("Service started");
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` or `SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` or `SERVICE_VERSION` - Service version
//! - `OTEL_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};
pub use self::tracing::{record_duration, record_error};

// Macros are exported via #[macro_export] and available
// as kirobridge_observability::conversion_span!().
