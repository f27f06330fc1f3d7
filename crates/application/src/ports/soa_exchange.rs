use async_trait::async_trait;
use ferrous_serial_domain::{DomainError, QueryConfig, ResponseSummary, TransportProtocol, Zone};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// What to ask every server: the zone's SOA, plus optional EDNS flags.
#[derive(Debug, Clone)]
pub struct SoaQuery {
    pub zone: Zone,
    pub dnssec_ok: bool,
    pub request_nsid: bool,
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl SoaQuery {
    pub fn new(zone: Zone, config: &QueryConfig) -> Self {
        Self {
            zone,
            dnssec_ok: config.dnssec_ok,
            request_nsid: config.request_nsid,
            timeout: config.timeout(),
            max_attempts: config.max_attempts,
        }
    }
}

/// An encoded query, reused unchanged when UDP escalates to TCP.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub id: u16,
    pub bytes: Arc<[u8]>,
    pub timeout: Duration,
    pub max_attempts: u32,
}

#[async_trait]
pub trait SoaExchange: Send + Sync {
    fn prepare(&self, query: &SoaQuery) -> Result<PreparedQuery, DomainError>;

    /// `Ok(None)` when the server never answered within the attempt budget.
    async fn exchange(
        &self,
        query: &PreparedQuery,
        server: IpAddr,
        protocol: TransportProtocol,
    ) -> Result<Option<ResponseSummary>, DomainError>;
}
