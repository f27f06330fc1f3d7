use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_serial_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// One connection per query; nothing is pooled.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        stream
            .set_nodelay(true)
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        send_with_length_prefix(&mut stream, message_bytes).await?;
        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        read_with_length_prefix(&mut stream).await
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Option<TransportResponse>, DomainError> {
        let response_bytes = match tokio::time::timeout(timeout, self.exchange(message_bytes)).await
        {
            Err(_) => return Ok(None),
            Ok(result) => result?,
        };

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(Some(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        }))
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::InvalidQuery(format!(
            "message of {} bytes does not fit a TCP frame",
            message_bytes.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::Transport(format!("write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::Transport(format!("write message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::Transport(format!("flush: {}", e)))?;

    Ok(())
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream
        .read_exact(&mut len_buf)
        .await
        .map_err(|e| DomainError::Transport(format!("read response length: {}", e)))?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream
        .read_exact(&mut response)
        .await
        .map_err(|e| DomainError::Transport(format!("read response body: {}", e)))?;

    Ok(response)
}
