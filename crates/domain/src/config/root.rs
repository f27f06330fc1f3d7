use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::query::{QueryConfig, MAX_TIMEOUT_SECS};
use super::survey::SurveyConfig;
use crate::transport::{AddressFamily, TransportMode};

/// Main configuration structure for Ferrous Serial
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Per-server query settings (timeouts, transport, EDNS flags)
    #[serde(default)]
    pub query: QueryConfig,

    /// Survey settings (servers to probe, drift tolerance)
    #[serde(default)]
    pub survey: SurveyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional file, then apply command-line overrides.
    ///
    /// Without a path the built-in defaults are used.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_additional();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(family) = overrides.address_family {
            self.survey.address_family = family;
        }
        if overrides.use_tcp {
            self.query.transport = TransportMode::TcpOnly;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(attempts) = overrides.max_attempts {
            self.query.max_attempts = attempts;
        }
        if let Some(drift) = overrides.allowed_drift {
            self.survey.allowed_drift = drift;
        }
        if let Some(master) = overrides.master {
            self.survey.master = Some(master);
        }
        if !overrides.additional.is_empty() {
            self.survey.additional = overrides.additional;
        }
        if overrides.skip_ns_set {
            self.survey.skip_ns_set = true;
        }
        if overrides.dnssec_ok {
            self.query.dnssec_ok = true;
        }
        if overrides.request_nsid {
            self.query.request_nsid = true;
        }
        if let Some(jobs) = overrides.jobs {
            self.survey.jobs = jobs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    fn normalize_additional(&mut self) {
        self.survey.additional = self
            .survey
            .additional
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if let Some(master) = &self.survey.master {
            if master.trim().is_empty() {
                self.survey.master = None;
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be at least 1 second".to_string(),
            ));
        }

        if self.query.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "Query timeout cannot exceed {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        if self.query.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "Maximum query attempts must be at least 1".to_string(),
            ));
        }

        if self.survey.jobs == 0 {
            return Err(ConfigError::Validation(
                "Concurrent probe count must be at least 1".to_string(),
            ));
        }

        if self.survey.skip_ns_set && self.survey.additional.is_empty() {
            return Err(ConfigError::Validation(
                "Skipping the published NS set requires additional nameservers".to_string(),
            ));
        }

        if !LoggingConfig::is_known_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub address_family: Option<AddressFamily>,
    pub use_tcp: bool,
    pub timeout_secs: Option<u64>,
    pub max_attempts: Option<u32>,
    pub allowed_drift: Option<u32>,
    pub master: Option<String>,
    pub additional: Vec<String>,
    pub skip_ns_set: bool,
    pub dnssec_ok: bool,
    pub request_nsid: bool,
    pub jobs: Option<usize>,
    pub log_level: Option<String>,
}
