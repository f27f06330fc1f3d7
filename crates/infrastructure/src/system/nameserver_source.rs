use async_trait::async_trait;
use ferrous_serial_application::ports::NameserverSource;
use ferrous_serial_domain::{DomainError, Zone};
use hickory_resolver::Resolver;
use tracing::debug;

/// Looks up the zone's published NS set with the system resolver
/// configuration (`/etc/resolv.conf` on Unix).
#[derive(Default)]
pub struct HickoryNameserverSource;

impl HickoryNameserverSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NameserverSource for HickoryNameserverSource {
    async fn nameservers(&self, zone: &Zone) -> Result<Vec<String>, DomainError> {
        let lookup_error = |reason: String| DomainError::NameserverLookup {
            zone: zone.to_string(),
            reason,
        };

        let resolver = Resolver::builder_tokio()
            .map_err(|e| lookup_error(e.to_string()))?
            .build();

        let lookup = resolver
            .ns_lookup(zone.as_str())
            .await
            .map_err(|e| lookup_error(e.to_string()))?;

        let names: Vec<String> = lookup.iter().map(|ns| ns.to_string()).collect();
        debug!(zone = %zone, count = names.len(), "Published NS set");
        Ok(names)
    }
}
