//! Typed summary of an authoritative server's answer and the ordered
//! validation pipeline that turns it into a serial or a failure kind.

use crate::probe::ProbeFailure;
use crate::serial::SoaSerial;
use crate::zone::Zone;
use std::fmt;

/// DNS response code, kept numeric so extended codes survive decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rcode(pub u16);

impl Rcode {
    pub const NO_ERROR: Rcode = Rcode(0);
    pub const REFUSED: Rcode = Rcode(5);

    pub fn is_no_error(&self) -> bool {
        *self == Self::NO_ERROR
    }

    pub fn as_str(&self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            6 => "YXDOMAIN",
            7 => "YXRRSET",
            8 => "NXRRSET",
            9 => "NOTAUTH",
            10 => "NOTZONE",
            16 => "BADVERS",
            23 => "BADCOOKIE",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => f.write_str(name),
            None => write!(f, "RCODE{}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKind {
    Soa(SoaSerial),
    /// Any other record type, by numeric type code.
    Other(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub owner: String,
    pub kind: AnswerKind,
}

impl AnswerRecord {
    pub fn soa(owner: impl Into<String>, serial: u32) -> Self {
        Self {
            owner: owner.into(),
            kind: AnswerKind::Soa(SoaSerial(serial)),
        }
    }

    pub fn other(owner: impl Into<String>, record_type: u16) -> Self {
        Self {
            owner: owner.into(),
            kind: AnswerKind::Other(record_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub rcode: Rcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub answers: Vec<AnswerRecord>,
    /// Raw NSID payload from the OPT record, if the server sent one.
    pub nsid: Option<Vec<u8>>,
}

impl ResponseSummary {
    pub fn validate(&self, zone: &Zone) -> Result<SoaSerial, ProbeFailure> {
        if !self.rcode.is_no_error() {
            return Err(ProbeFailure::ResponseCode(self.rcode));
        }
        if !self.authoritative {
            return Err(ProbeFailure::NotAuthoritative);
        }
        if self.truncated {
            return Err(ProbeFailure::Truncated);
        }
        self.soa_serial(zone).ok_or(ProbeFailure::SoaNotFound)
    }

    /// First SOA answer owned by the zone apex.
    pub fn soa_serial(&self, zone: &Zone) -> Option<SoaSerial> {
        self.answers.iter().find_map(|record| match record.kind {
            AnswerKind::Soa(serial) if zone.matches(&record.owner) => Some(serial),
            _ => None,
        })
    }

    pub fn nsid_token(&self) -> Option<String> {
        self.nsid
            .as_ref()
            .map(|payload| String::from_utf8_lossy(payload).into_owned())
    }
}

/// Full check order: missing response, rcode, AA, TC, then the SOA answer.
pub fn validate_response(
    response: Option<&ResponseSummary>,
    zone: &Zone,
) -> Result<SoaSerial, ProbeFailure> {
    match response {
        None => Err(ProbeFailure::NoResponse),
        Some(response) => response.validate(zone),
    }
}
