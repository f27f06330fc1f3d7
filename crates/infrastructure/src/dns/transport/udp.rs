//! UDP transport (RFC 1035 §4.2.1).
//!
//! Messages are sent unframed. Replies are matched to the query by source
//! address and message ID; anything else is dropped while the attempt's
//! deadline runs.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_serial_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;

/// Matches the EDNS payload size advertised in queries.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Stand-in deadline for timeouts too large to add to `Instant::now()`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Option<TransportResponse>, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| DomainError::Transport(format!("bind: {}", e)))?;

        let deadline = deadline_after(timeout);

        let bytes_sent =
            match tokio::time::timeout_at(deadline, socket.send_to(message_bytes, self.server_addr))
                .await
            {
                Err(_) => return Ok(None),
                Ok(result) => result.map_err(|e| DomainError::Transport(e.to_string()))?,
            };

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) =
                match tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf)).await {
                    Err(_) => return Ok(None),
                    Ok(result) => result.map_err(|e| DomainError::Transport(e.to_string()))?,
                };

            if from_addr.ip() != self.server_addr.ip() {
                debug!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "Dropping UDP datagram from unexpected source"
                );
                continue;
            }

            if let Err(e) =
                validate_response_id(message_bytes, &recv_buf[..bytes_received], self.server_addr)
            {
                debug!(error = %e, "Dropping UDP datagram");
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %self.server_addr, bytes_received, "UDP response received");

            return Ok(Some(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            }));
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

pub(crate) fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout).unwrap_or(now + FAR_FUTURE)
}

pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server_addr: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "message from {} too short to carry an ID",
            server_addr
        )));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::InvalidDnsResponse(format!(
            "ID mismatch from {}: expected {:#06x}, got {:#06x}",
            server_addr, query_id, response_id
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
