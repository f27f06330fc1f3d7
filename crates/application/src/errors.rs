use ferrous_serial_domain::{DomainError, Verdict};
use thiserror::Error;

/// Conditions that end a survey before every nameserver was probed.
#[derive(Error, Debug, Clone)]
pub enum SurveyError {
    #[error("failed to obtain master serial from {master}")]
    MasterUnavailable { master: String },

    #[error(transparent)]
    NameserverLookup(DomainError),
}

impl SurveyError {
    pub fn verdict(&self) -> Verdict {
        match self {
            SurveyError::MasterUnavailable { .. } => Verdict::MasterFailed,
            SurveyError::NameserverLookup(_) => Verdict::PartialFailure,
        }
    }
}
