//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). Invalid filter
/// directives fall back to `info`.
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Pretty,
        };
        init_with(&config);
        init_with(&ObservabilityConfig::default());
        ::tracing::info!("observability initialized twice");
    }
}
