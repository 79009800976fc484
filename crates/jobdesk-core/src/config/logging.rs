//! Logging configuration and tracing initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the global tracing subscriber from this configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Safe to call
    /// only once per process; later calls are ignored.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        let result = match self.format.as_str() {
            "json" => builder.json().try_init(),
            _ => builder.try_init(),
        };
        // A second init (e.g. from tests) is not an error worth surfacing.
        let _ = result;
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
