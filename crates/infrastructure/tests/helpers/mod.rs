pub mod builders;
pub mod dns_server_mock;

pub use builders::{soa_record, ResponseBuilder};
pub use dns_server_mock::{MockDnsServer, SilentUdpServer};
