use async_trait::async_trait;
use ferrous_serial_domain::{DomainError, Zone};

#[async_trait]
pub trait NameserverSource: Send + Sync {
    /// Target names of the zone's published NS record set.
    async fn nameservers(&self, zone: &Zone) -> Result<Vec<String>, DomainError>;
}
