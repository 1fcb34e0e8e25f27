use serde::{Deserialize, Serialize};

/// `[logging]` section. Logs always go to stderr, stdout carries the pipe
/// protocol.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `geowrr_application=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
