use crate::ports::{PreparedQuery, SoaExchange, SoaQuery};
use ferrous_serial_domain::{
    validate_response, DomainError, ProbeFailure, ProbeOutcome, ResponseSummary, TransportMode,
    TransportProtocol, Zone,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Asks a single server address for the zone's SOA serial.
pub struct ProbeServerUseCase {
    exchange: Arc<dyn SoaExchange>,
    query: SoaQuery,
    transport: TransportMode,
}

impl ProbeServerUseCase {
    pub fn new(exchange: Arc<dyn SoaExchange>, query: SoaQuery, transport: TransportMode) -> Self {
        Self {
            exchange,
            query,
            transport,
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.query.zone
    }

    pub fn nsid_requested(&self) -> bool {
        self.query.request_nsid
    }

    /// Never fails: every problem is folded into the returned outcome and
    /// reported on the diagnostic stream.
    pub async fn execute(&self, name: Arc<str>, address: IpAddr) -> ProbeOutcome {
        let prepared = match self.exchange.prepare(&self.query) {
            Ok(prepared) => prepared,
            Err(e) => return self.transport_failure(name, address, e),
        };

        let response = match self.send(&prepared, address).await {
            Ok(response) => response,
            Err(e) => return self.transport_failure(name, address, e),
        };

        match validate_response(response.as_ref(), &self.query.zone) {
            Ok(serial) => {
                let nsid = if self.query.request_nsid {
                    response.as_ref().and_then(ResponseSummary::nsid_token)
                } else {
                    None
                };
                debug!(server = %name, address = %address, serial = %serial, "SOA serial received");
                ProbeOutcome::success(name, address, serial, nsid)
            }
            Err(failure) => {
                error!("{}", failure.report(&name, Some(address)));
                ProbeOutcome::failure(name, address, failure)
            }
        }
    }

    async fn send(
        &self,
        prepared: &PreparedQuery,
        address: IpAddr,
    ) -> Result<Option<ResponseSummary>, DomainError> {
        let protocol = self.transport.initial_protocol();
        debug!(
            address = %address,
            query_id = prepared.id,
            protocol = protocol.protocol_name(),
            "Sending SOA query"
        );
        let response = self.exchange.exchange(prepared, address, protocol).await?;

        match response {
            Some(summary) if summary.truncated && protocol == TransportProtocol::Udp => {
                warn!("response was truncated; retrying with TCP ..");
                self.exchange
                    .exchange(prepared, address, TransportProtocol::Tcp)
                    .await
            }
            other => Ok(other),
        }
    }

    fn transport_failure(&self, name: Arc<str>, address: IpAddr, e: DomainError) -> ProbeOutcome {
        let failure = ProbeFailure::Transport(e.to_string());
        error!("{}", failure.report(&name, Some(address)));
        ProbeOutcome::failure(name, address, failure)
    }
}
