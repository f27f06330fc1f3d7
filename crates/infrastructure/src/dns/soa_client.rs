use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use super::transport::send_query;
use async_trait::async_trait;
use ferrous_serial_application::ports::{PreparedQuery, SoaExchange, SoaQuery};
use ferrous_serial_domain::{DomainError, ResponseSummary, TransportProtocol};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::debug;

pub const DNS_PORT: u16 = 53;

/// Sends SOA queries over the wire and decodes the replies.
pub struct WireSoaExchange {
    port: u16,
}

impl WireSoaExchange {
    pub fn new() -> Self {
        Self { port: DNS_PORT }
    }

    /// Targets a non-standard port on every server.
    pub fn with_port(port: u16) -> Self {
        Self { port }
    }
}

impl Default for WireSoaExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SoaExchange for WireSoaExchange {
    fn prepare(&self, query: &SoaQuery) -> Result<PreparedQuery, DomainError> {
        let (id, bytes) =
            MessageBuilder::build_soa_query(query.zone.as_str(), query.dnssec_ok, query.request_nsid)?;

        Ok(PreparedQuery {
            id,
            bytes: Arc::from(bytes),
            timeout: query.timeout,
            max_attempts: query.max_attempts,
        })
    }

    async fn exchange(
        &self,
        query: &PreparedQuery,
        server: IpAddr,
        protocol: TransportProtocol,
    ) -> Result<Option<ResponseSummary>, DomainError> {
        let server_addr = SocketAddr::new(server, self.port);

        let Some(response) = send_query(
            &query.bytes,
            server_addr,
            protocol,
            query.timeout,
            query.max_attempts,
        )
        .await?
        else {
            return Ok(None);
        };

        debug!(
            server = %server_addr,
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "SOA response received"
        );

        ResponseParser::parse(&response.bytes).map(Some)
    }
}
