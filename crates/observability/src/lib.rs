//! Tracing/logging setup shared by binaries and tests.

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unusable `CATALOG_LOG_FORMAT` falls back to the default configuration.
pub fn init() {
    match config::ObservabilityConfig::from_env() {
        Ok(config) => tracing::init_with(&config),
        Err(err) => {
            tracing::init_with(&config::ObservabilityConfig::default());
            ::tracing::warn!("{err}; using default log configuration");
        }
    }
}

/// Logging configuration.
pub mod config;

/// Tracing subscriber installation (filters, formatting).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
