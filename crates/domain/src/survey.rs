use crate::probe::ProbeOutcome;
use crate::serial::SoaSerial;
use crate::verdict::{decide, Verdict};
use std::net::IpAddr;
use std::sync::Arc;

/// The designated master whose serial is the drift baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterReference {
    pub name: Arc<str>,
    pub address: IpAddr,
    pub serial: SoaSerial,
}

impl MasterReference {
    pub fn is_master_address(&self, address: &IpAddr) -> bool {
        self.address == *address
    }
}

/// Every outcome of one run, in probe order.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    outcomes: Vec<ProbeOutcome>,
    master: Option<MasterReference>,
}

impl Survey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: ProbeOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_master(&mut self, master: MasterReference) {
        self.master = Some(master);
    }

    pub fn master(&self) -> Option<&MasterReference> {
        self.master.as_ref()
    }

    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn serials(&self) -> Vec<SoaSerial> {
        self.outcomes.iter().filter_map(ProbeOutcome::serial).collect()
    }

    pub fn verdict(&self, allowed_drift: u32) -> Verdict {
        decide(self.attempted(), &self.serials(), allowed_drift)
    }
}
