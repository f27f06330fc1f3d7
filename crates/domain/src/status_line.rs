use crate::probe::ProbeOutcome;
use crate::serial::SoaSerial;
use crate::survey::MasterReference;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterMark {
    Master,
    Drift(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NsidColumn {
    NotRequested,
    Missing,
    Token(String),
}

/// One stdout line for a successfully probed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub serial: SoaSerial,
    pub mark: Option<MasterMark>,
    pub nsid: NsidColumn,
    pub name: Arc<str>,
    pub address: IpAddr,
}

impl StatusLine {
    /// `None` for failed outcomes; those only produce diagnostics.
    pub fn for_outcome(
        outcome: &ProbeOutcome,
        master: Option<&MasterReference>,
        nsid_requested: bool,
    ) -> Option<Self> {
        let serial = outcome.serial()?;
        let address = outcome.address?;

        let mark = master.map(|m| {
            if m.is_master_address(&address) {
                MasterMark::Master
            } else {
                MasterMark::Drift(serial.drift_against(m.serial))
            }
        });

        let nsid = match (nsid_requested, &outcome.nsid) {
            (false, _) => NsidColumn::NotRequested,
            (true, Some(token)) => NsidColumn::Token(token.clone()),
            (true, None) => NsidColumn::Missing,
        };

        Some(Self {
            serial,
            mark,
            nsid,
            name: outcome.name.clone(),
            address,
        })
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>15}", self.serial.value())?;
        match &self.mark {
            Some(MasterMark::Master) => write!(f, " [{:>9}]", "MASTER")?,
            Some(MasterMark::Drift(drift)) => write!(f, " [{:>9}]", drift)?,
            None => {}
        }
        f.write_str(" ")?;
        match &self.nsid {
            NsidColumn::NotRequested => {}
            NsidColumn::Missing => f.write_str("() ")?,
            NsidColumn::Token(token) => write!(f, "({}) ", token)?,
        }
        write!(f, "{} {}", self.name, self.address)
    }
}
