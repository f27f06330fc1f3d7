use crate::response::Rcode;
use crate::serial::SoaSerial;
use crate::transport::AddressFamily;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// Why one server address did not yield a usable serial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    NoResponse,
    ResponseCode(Rcode),
    NotAuthoritative,
    Truncated,
    SoaNotFound,
    Transport(String),
    Unresolvable(AddressFamily),
}

impl ProbeFailure {
    /// Operator-facing diagnostic for this failure at `name`/`address`.
    pub fn report(&self, name: &str, address: Option<IpAddr>) -> String {
        let addr = address.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string());
        match self {
            ProbeFailure::NoResponse => format!("No answer from {} {}", name, addr),
            ProbeFailure::ResponseCode(rcode) => match rcode.as_str() {
                Some(mnemonic) => format!("{} {} rcode {} ({})", name, addr, rcode.0, mnemonic),
                None => format!("{} {} rcode {}", name, addr, rcode.0),
            },
            ProbeFailure::NotAuthoritative => format!("{} {} answer not authoritative", name, addr),
            ProbeFailure::Truncated => format!("{} {} answer is truncated", name, addr),
            ProbeFailure::SoaNotFound => format!("{} {}: SOA record not found.", name, addr),
            ProbeFailure::Transport(reason) => format!("{} {}: socket: {}", name, addr, reason),
            ProbeFailure::Unresolvable(family) => {
                format!("{}: no {} address to query", name, family)
            }
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::NoResponse => f.write_str("no response"),
            ProbeFailure::ResponseCode(rcode) => write!(f, "rcode {}", rcode),
            ProbeFailure::NotAuthoritative => f.write_str("answer not authoritative"),
            ProbeFailure::Truncated => f.write_str("answer is truncated"),
            ProbeFailure::SoaNotFound => f.write_str("SOA record not found"),
            ProbeFailure::Transport(reason) => write!(f, "socket: {}", reason),
            ProbeFailure::Unresolvable(family) => write!(f, "no {} address", family),
        }
    }
}

/// Result of querying one address (or of failing to find any address for a name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub name: Arc<str>,
    pub address: Option<IpAddr>,
    pub result: Result<SoaSerial, ProbeFailure>,
    pub nsid: Option<String>,
}

impl ProbeOutcome {
    pub fn success(name: Arc<str>, address: IpAddr, serial: SoaSerial, nsid: Option<String>) -> Self {
        Self {
            name,
            address: Some(address),
            result: Ok(serial),
            nsid,
        }
    }

    pub fn failure(name: Arc<str>, address: IpAddr, failure: ProbeFailure) -> Self {
        Self {
            name,
            address: Some(address),
            result: Err(failure),
            nsid: None,
        }
    }

    pub fn unresolvable(name: Arc<str>, family: AddressFamily) -> Self {
        Self {
            name,
            address: None,
            result: Err(ProbeFailure::Unresolvable(family)),
            nsid: None,
        }
    }

    pub fn serial(&self) -> Option<SoaSerial> {
        self.result.as_ref().ok().copied()
    }

    pub fn failure_kind(&self) -> Option<&ProbeFailure> {
        self.result.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
