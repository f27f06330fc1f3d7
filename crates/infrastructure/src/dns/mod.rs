pub mod message_builder;
pub mod response_parser;
pub mod soa_client;
pub mod transport;

pub use message_builder::{MessageBuilder, EDNS_MAX_PAYLOAD};
pub use response_parser::ResponseParser;
pub use soa_client::{WireSoaExchange, DNS_PORT};
