mod address_resolver;
mod nameserver_source;
mod soa_exchange;
mod status_reporter;

pub use address_resolver::AddressResolver;
pub use nameserver_source::NameserverSource;
pub use soa_exchange::{PreparedQuery, SoaExchange, SoaQuery};
pub use status_reporter::StatusReporter;
