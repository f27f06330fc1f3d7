pub mod address_resolver;
pub mod nameserver_source;

pub use address_resolver::SystemAddressResolver;
pub use nameserver_source::HickoryNameserverSource;
