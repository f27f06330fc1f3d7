#![allow(dead_code)]
use hickory_proto::op::{Edns, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn soa_record(zone: &str, serial: u32) -> Record {
    let name = Name::from_str(zone).unwrap();
    let mname = Name::from_str(&format!("ns1.{}", zone)).unwrap();
    let rname = Name::from_str(&format!("hostmaster.{}", zone)).unwrap();
    let soa = SOA::new(mname, rname, serial, 3600, 900, 604800, 300);
    Record::from_rdata(name, 3600, RData::SOA(soa))
}

pub fn a_record(owner: &str, addr: Ipv4Addr) -> Record {
    Record::from_rdata(Name::from_str(owner).unwrap(), 300, RData::A(A(addr)))
}

/// Builds a reply to a decoded query; starts out authoritative and clean.
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn reply_to(query: &Message) -> Self {
        let mut message = Message::new();
        message.set_id(query.id());
        message.set_message_type(MessageType::Response);
        message.set_op_code(OpCode::Query);
        message.set_authoritative(true);
        message.add_queries(query.queries().to_vec());
        Self { message }
    }

    pub fn standalone(id: u16) -> Self {
        let mut message = Message::new();
        message.set_id(id);
        message.set_message_type(MessageType::Response);
        message.set_op_code(OpCode::Query);
        message.set_authoritative(true);
        Self { message }
    }

    pub fn soa(mut self, zone: &str, serial: u32) -> Self {
        self.message.add_answer(soa_record(zone, serial));
        self
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.set_response_code(rcode);
        self
    }

    pub fn authoritative(mut self, authoritative: bool) -> Self {
        self.message.set_authoritative(authoritative);
        self
    }

    pub fn truncated(mut self, truncated: bool) -> Self {
        self.message.set_truncated(truncated);
        self
    }

    pub fn nsid(mut self, token: &str) -> Self {
        let mut edns = Edns::new();
        edns.set_max_payload(4096);
        edns.options_mut().insert(EdnsOption::Unknown(
            u16::from(EdnsCode::NSID),
            token.as_bytes().to_vec(),
        ));
        self.message.set_edns(edns);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.message.to_bytes().unwrap()
    }
}
