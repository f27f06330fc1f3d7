#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_serial_application::ports::{
    AddressResolver, NameserverSource, PreparedQuery, SoaExchange, SoaQuery, StatusReporter,
};
use ferrous_serial_domain::{
    AddressFamily, AnswerRecord, DomainError, Rcode, ResponseSummary, StatusLine,
    TransportProtocol, Zone,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct ResponseBuilder {
    summary: ResponseSummary,
}

impl ResponseBuilder {
    pub fn soa(owner: &str, serial: u32) -> Self {
        Self {
            summary: ResponseSummary {
                rcode: Rcode::NO_ERROR,
                authoritative: true,
                truncated: false,
                answers: vec![AnswerRecord::soa(owner, serial)],
                nsid: None,
            },
        }
    }

    pub fn rcode(mut self, rcode: Rcode) -> Self {
        self.summary.rcode = rcode;
        self
    }

    pub fn authoritative(mut self, authoritative: bool) -> Self {
        self.summary.authoritative = authoritative;
        self
    }

    pub fn truncated(mut self, truncated: bool) -> Self {
        self.summary.truncated = truncated;
        self
    }

    pub fn nsid(mut self, nsid: &str) -> Self {
        self.summary.nsid = Some(nsid.as_bytes().to_vec());
        self
    }

    pub fn build(self) -> ResponseSummary {
        self.summary
    }
}

type Scripted = Result<Option<ResponseSummary>, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCall {
    pub address: IpAddr,
    pub protocol: TransportProtocol,
    pub query_id: u16,
}

/// Answers from a fixed script keyed by address and protocol.
/// Unscripted exchanges behave like a silent server.
#[derive(Default)]
pub struct MockSoaExchange {
    script: Mutex<HashMap<(IpAddr, TransportProtocol), Scripted>>,
    delays: Mutex<HashMap<IpAddr, Duration>>,
    calls: Mutex<Vec<ExchangeCall>>,
    prepare_error: Mutex<Option<DomainError>>,
    prepared: Mutex<Vec<SoaQuery>>,
    next_id: AtomicU16,
}

impl MockSoaExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, address: &str, protocol: TransportProtocol, response: ResponseSummary) {
        self.script
            .lock()
            .unwrap()
            .insert((address.parse().unwrap(), protocol), Ok(Some(response)));
    }

    pub fn respond_udp(&self, address: &str, response: ResponseSummary) {
        self.respond(address, TransportProtocol::Udp, response);
    }

    pub fn fail(&self, address: &str, protocol: TransportProtocol, error: DomainError) {
        self.script
            .lock()
            .unwrap()
            .insert((address.parse().unwrap(), protocol), Err(error));
    }

    pub fn delay(&self, address: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(address.parse().unwrap(), delay);
    }

    pub fn fail_prepare(&self, error: DomainError) {
        *self.prepare_error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<ExchangeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn prepared(&self) -> Vec<SoaQuery> {
        self.prepared.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoaExchange for MockSoaExchange {
    fn prepare(&self, query: &SoaQuery) -> Result<PreparedQuery, DomainError> {
        if let Some(error) = self.prepare_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.prepared.lock().unwrap().push(query.clone());
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(PreparedQuery {
            id,
            bytes: Arc::from(id.to_be_bytes().to_vec()),
            timeout: query.timeout,
            max_attempts: query.max_attempts,
        })
    }

    async fn exchange(
        &self,
        query: &PreparedQuery,
        server: IpAddr,
        protocol: TransportProtocol,
    ) -> Result<Option<ResponseSummary>, DomainError> {
        self.calls.lock().unwrap().push(ExchangeCall {
            address: server,
            protocol,
            query_id: query.id,
        });

        let delay = self.delays.lock().unwrap().get(&server).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.script
            .lock()
            .unwrap()
            .get(&(server, protocol))
            .cloned()
            .unwrap_or(Ok(None))
    }
}

#[derive(Default)]
pub struct MockAddressResolver {
    addresses: Mutex<HashMap<String, Vec<IpAddr>>>,
    lookups: Mutex<Vec<(String, AddressFamily)>>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, addresses: &[&str]) -> Self {
        self.addresses.lock().unwrap().insert(
            name.to_string(),
            addresses.iter().map(|a| a.parse().unwrap()).collect(),
        );
        self
    }

    pub fn lookups(&self) -> Vec<(String, AddressFamily)> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve(&self, name: &str, family: AddressFamily) -> Vec<IpAddr> {
        self.lookups
            .lock()
            .unwrap()
            .push((name.to_string(), family));
        self.addresses
            .lock()
            .unwrap()
            .get(name)
            .map(|all| all.iter().copied().filter(|a| family.matches(a)).collect())
            .unwrap_or_default()
    }
}

pub struct MockNameserverSource {
    result: Result<Vec<String>, DomainError>,
    queried: Mutex<Vec<String>>,
}

impl MockNameserverSource {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            result: Ok(names.iter().map(|n| n.to_string()).collect()),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl NameserverSource for MockNameserverSource {
    async fn nameservers(&self, zone: &Zone) -> Result<Vec<String>, DomainError> {
        self.queried.lock().unwrap().push(zone.to_string());
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<StatusLine>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<StatusLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn rendered(&self) -> Vec<String> {
        self.lines().iter().map(|l| l.to_string()).collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn report(&self, line: &StatusLine) {
        self.lines.lock().unwrap().push(line.clone());
    }
}
