use async_trait::async_trait;
use ferrous_serial_application::ports::AddressResolver;
use ferrous_serial_domain::{AddressFamily, DomainError};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

use crate::dns::soa_client::DNS_PORT;

/// Resolves nameserver names through the operating system's resolver.
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl AddressResolver for SystemAddressResolver {
    async fn resolve(&self, name: &str, family: AddressFamily) -> Vec<IpAddr> {
        let candidates = match name.parse::<IpAddr>() {
            Ok(literal) => vec![literal],
            Err(_) => match resolve_all(name, DNS_PORT, self.timeout).await {
                Ok(addrs) => addrs.into_iter().map(|a| a.ip()).collect(),
                Err(e) => {
                    debug!(name = %name, error = %e, "Address lookup failed");
                    Vec::new()
                }
            },
        };

        let addresses = filter_family(candidates, family);
        if addresses.is_empty() {
            warn!("getaddrinfo({}): {} failed", name, family.label());
        } else {
            debug!(name = %name, count = addresses.len(), "Resolved nameserver addresses");
        }
        addresses
    }
}

/// Every address the system resolver returns for `hostname`.
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::Resolution {
            name: hostname.to_string(),
            reason: e.to_string(),
        })?;

    Ok(addrs.collect())
}

/// Keeps addresses of `family`, dropping repeats but not reordering.
pub(crate) fn filter_family(addresses: Vec<IpAddr>, family: AddressFamily) -> Vec<IpAddr> {
    let mut kept: Vec<IpAddr> = Vec::with_capacity(addresses.len());
    for address in addresses {
        if family.matches(&address) && !kept.contains(&address) {
            kept.push(address);
        }
    }
    kept
}
