use crate::serial::SoaSerial;

/// Final status of a run, one per process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every server answered and serials agree within the allowed drift.
    Consistent,
    DriftExceeded,
    /// At least one server (or name) did not produce a usable serial.
    PartialFailure,
    MasterFailed,
    Usage,
}

impl Verdict {
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Consistent => 0,
            Verdict::DriftExceeded => 1,
            Verdict::PartialFailure => 2,
            Verdict::MasterFailed => 3,
            Verdict::Usage => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Consistent => "consistent",
            Verdict::DriftExceeded => "drift_exceeded",
            Verdict::PartialFailure => "partial_failure",
            Verdict::MasterFailed => "master_failed",
            Verdict::Usage => "usage",
        }
    }
}

/// Missing answers are checked before drift so connectivity problems are
/// never reported as replication lag.
pub fn decide(attempted: usize, successes: &[SoaSerial], allowed_drift: u32) -> Verdict {
    if attempted != successes.len() || successes.is_empty() {
        return Verdict::PartialFailure;
    }

    let first = successes[0];
    if successes.iter().all(|serial| *serial == first) {
        return Verdict::Consistent;
    }

    let (min, max) = successes
        .iter()
        .fold((first, first), |(min, max), s| (min.min(*s), max.max(*s)));
    let range = max.value() - min.value();

    if range > allowed_drift {
        Verdict::DriftExceeded
    } else {
        Verdict::Consistent
    }
}
