//! Ferrous Serial Domain Layer
pub mod config;
pub mod errors;
pub mod nameserver_set;
pub mod probe;
pub mod response;
pub mod serial;
pub mod status_line;
pub mod survey;
pub mod transport;
pub mod verdict;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, QueryConfig, SurveyConfig};
pub use errors::DomainError;
pub use nameserver_set::NameserverSet;
pub use probe::{ProbeFailure, ProbeOutcome};
pub use response::{validate_response, AnswerKind, AnswerRecord, Rcode, ResponseSummary};
pub use serial::SoaSerial;
pub use status_line::{MasterMark, NsidColumn, StatusLine};
pub use survey::{MasterReference, Survey};
pub use transport::{AddressFamily, TransportMode, TransportProtocol};
pub use verdict::{decide, Verdict};
pub use zone::{normalize_name, Zone};
