use crate::transport::TransportMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on `timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Per-server query behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Seconds to wait for each individual attempt.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total UDP attempts per server, the first one included. TCP always
    /// gets exactly one attempt.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default)]
    pub transport: TransportMode,

    #[serde(default)]
    pub dnssec_ok: bool,

    #[serde(default)]
    pub request_nsid: bool,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            transport: TransportMode::default(),
            dnssec_ok: false,
            request_nsid: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    3
}

fn default_max_attempts() -> u32 {
    3
}
