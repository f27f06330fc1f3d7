use ferrous_serial_domain::{AnswerRecord, DomainError, Rcode, ResponseSummary};
use hickory_proto::op::Message;
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};
use hickory_proto::rr::RData;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a reply into the header flags, answer records and NSID
    /// payload the serial checks look at.
    pub fn parse(response_bytes: &[u8]) -> Result<ResponseSummary, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let answers = message
            .answers()
            .iter()
            .map(|record| {
                let owner = record.name().to_utf8();
                match record.data() {
                    RData::SOA(soa) => AnswerRecord::soa(owner, soa.serial()),
                    _ => AnswerRecord::other(owner, u16::from(record.record_type())),
                }
            })
            .collect();

        let summary = ResponseSummary {
            rcode: Rcode(u16::from(message.response_code())),
            authoritative: message.authoritative(),
            truncated: message.truncated(),
            answers,
            nsid: Self::nsid(&message),
        };

        debug!(
            rcode = %summary.rcode,
            authoritative = summary.authoritative,
            truncated = summary.truncated,
            answers = summary.answers.len(),
            "Parsed DNS response"
        );

        Ok(summary)
    }

    fn nsid(message: &Message) -> Option<Vec<u8>> {
        let edns = message.extensions().as_ref()?;
        match edns.option(EdnsCode::NSID)? {
            EdnsOption::Unknown(_, data) => Some(data.clone()),
            _ => None,
        }
    }
}
