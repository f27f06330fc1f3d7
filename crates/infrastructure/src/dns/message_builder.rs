//! SOA query construction in wire format using `hickory-proto`.

use ferrous_serial_domain::DomainError;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Advertised EDNS(0) payload size; also the UDP receive buffer size.
pub const EDNS_MAX_PAYLOAD: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a non-recursive `<zone> IN SOA` query with a random ID.
    ///
    /// An OPT record is attached only when DNSSEC-OK or NSID is wanted:
    /// the DO bit for the former, an empty NSID option for the latter.
    pub fn build_soa_query(
        zone: &str,
        dnssec_ok: bool,
        request_nsid: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(zone).map_err(|e| {
            DomainError::InvalidQuery(format!("Invalid zone name '{}': {}", zone, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::SOA);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message.set_id(id);
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        if dnssec_ok || request_nsid {
            message.set_edns(Self::edns(dnssec_ok, request_nsid));
        }

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn edns(dnssec_ok: bool, request_nsid: bool) -> Edns {
        let mut edns = Edns::new();
        edns.set_max_payload(EDNS_MAX_PAYLOAD);
        edns.set_version(0);
        edns.set_dnssec_ok(dnssec_ok);
        if request_nsid {
            edns.options_mut()
                .insert(EdnsOption::Unknown(u16::from(EdnsCode::NSID), Vec::new()));
        }
        edns
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidQuery(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
