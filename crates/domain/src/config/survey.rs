use crate::transport::AddressFamily;
use serde::{Deserialize, Serialize};

/// Which servers get probed and how their serials are judged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub address_family: AddressFamily,

    /// Largest tolerated `max - min` spread between serials.
    #[serde(default)]
    pub allowed_drift: u32,

    /// Name or address of the master whose serial is the drift baseline.
    #[serde(default)]
    pub master: Option<String>,

    #[serde(default)]
    pub additional: Vec<String>,

    /// Probe only `additional`, ignoring the zone's published NS set.
    #[serde(default)]
    pub skip_ns_set: bool,

    /// Addresses probed at the same time. 1 keeps the survey sequential.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            address_family: AddressFamily::default(),
            allowed_drift: 0,
            master: None,
            additional: Vec::new(),
            skip_ns_set: false,
            jobs: default_jobs(),
        }
    }
}

fn default_jobs() -> usize {
    1
}
