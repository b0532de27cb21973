use thiserror::Error;

/// Environment variable holding the log filter directives.
pub const FILTER_VAR: &str = "RUST_LOG";

/// Environment variable selecting the output format (`json` or `pretty`).
pub const FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported CATALOG_LOG_FORMAT value '{0}' (expected 'json' or 'pretty')")]
    UnknownFormat(String),
}

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (default).
    #[default]
    Json,
    /// Human-readable multi-line output for local development.
    Pretty,
}

impl core::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,catalog_infra=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `CATALOG_LOG_FORMAT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map lookup).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let filter = lookup(FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup(FORMAT_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
