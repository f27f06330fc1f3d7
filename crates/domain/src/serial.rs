use std::fmt;

/// SOA serial number. Only compared and subtracted here, never incremented,
/// so RFC 1982 wraparound is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoaSerial(pub u32);

impl SoaSerial {
    pub fn value(self) -> u32 {
        self.0
    }

    /// Signed distance `master - self`; positive when this server lags behind.
    pub fn drift_against(self, master: SoaSerial) -> i64 {
        i64::from(master.0) - i64::from(self.0)
    }
}

impl From<u32> for SoaSerial {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for SoaSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
