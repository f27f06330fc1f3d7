use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid zone name: {0}")]
    InvalidZone(String),

    #[error("Invalid DNS query: {0}")]
    InvalidQuery(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("{0}")]
    Transport(String),

    #[error("Address resolution failed for {name}: {reason}")]
    Resolution { name: String, reason: String },

    #[error("NS lookup failed for {zone}: {reason}")]
    NameserverLookup { zone: String, reason: String },
}
