pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_serial_domain::{DomainError, TransportProtocol};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// One attempt. `Ok(None)` means the attempt timed out.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Option<TransportResponse>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Option<TransportResponse>, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
        }
    }

    /// UDP gets the whole attempt budget, TCP exactly one attempt.
    pub fn attempts(&self, max_attempts: u32) -> u32 {
        match self {
            Self::Udp(_) => max_attempts.max(1),
            Self::Tcp(_) => 1,
        }
    }
}

pub fn create_transport(protocol: TransportProtocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}

/// Sends `message_bytes` to `server_addr`, retrying timed-out UDP attempts.
/// Returns `Ok(None)` once the attempt budget is spent without an answer.
pub async fn send_query(
    message_bytes: &[u8],
    server_addr: SocketAddr,
    protocol: TransportProtocol,
    timeout: Duration,
    max_attempts: u32,
) -> Result<Option<TransportResponse>, DomainError> {
    let transport = create_transport(protocol, server_addr);
    let attempts = transport.attempts(max_attempts);

    for attempt in 1..=attempts {
        if let Some(response) = transport.send(message_bytes, timeout).await? {
            return Ok(Some(response));
        }
        warn!(
            "{} query timeout for {}",
            transport.protocol_name(),
            server_addr.ip()
        );
        debug!(attempt, attempts, server = %server_addr, "Attempt timed out");
    }

    Ok(None)
}
