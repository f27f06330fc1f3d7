use serde::{Deserialize, Serialize};

/// Accepted values for `logging.level` and `--log-level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Diagnostic verbosity on stderr; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn is_known_level(level: &str) -> bool {
        LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
