use async_trait::async_trait;
use ferrous_serial_domain::AddressFamily;
use std::net::IpAddr;

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Addresses of `name` in `family`. Failures are logged by the
    /// implementation and come back as an empty list.
    async fn resolve(&self, name: &str, family: AddressFamily) -> Vec<IpAddr>;
}
