#![allow(dead_code)]
use ferrous_serial_domain::TransportProtocol;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub type Handler = Arc<dyn Fn(&Message, TransportProtocol) -> Option<Message> + Send + Sync>;

#[derive(Default)]
struct Counters {
    udp: AtomicUsize,
    tcp: AtomicUsize,
    queries: Mutex<Vec<Vec<u8>>>,
}

/// Loopback DNS server answering on UDP and TCP at the same port.
/// Returning `None` from the handler keeps the server silent for that query.
pub struct MockDnsServer {
    addr: SocketAddr,
    counters: Arc<Counters>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message, TransportProtocol) -> Option<Message> + Send + Sync + 'static,
    {
        Self::start_with(Arc::new(handler), false).await
    }

    /// Like `start`, but every UDP answer is preceded by a copy carrying
    /// the wrong message ID.
    pub async fn start_with_decoy<F>(handler: F) -> Self
    where
        F: Fn(&Message, TransportProtocol) -> Option<Message> + Send + Sync + 'static,
    {
        Self::start_with(Arc::new(handler), true).await
    }

    async fn start_with(handler: Handler, decoy: bool) -> Self {
        let (udp, tcp) = bind_pair().await;
        let addr = udp.local_addr().unwrap();
        let counters = Arc::new(Counters::default());
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_handler = handler.clone();
        let udp_counters = counters.clone();
        let tcp_counters = counters.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = udp.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        udp_counters.udp.fetch_add(1, Ordering::SeqCst);
                        udp_counters.queries.lock().unwrap().push(buf[..len].to_vec());

                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        if let Some(response) = udp_handler(&query, TransportProtocol::Udp) {
                            if decoy {
                                let mut wrong = response.clone();
                                wrong.set_id(response.id().wrapping_add(1));
                                let _ = udp.send_to(&wrong.to_bytes().unwrap(), peer).await;
                            }
                            let _ = udp.send_to(&response.to_bytes().unwrap(), peer).await;
                        }
                    }
                    accepted = tcp.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        tcp_counters.tcp.fetch_add(1, Ordering::SeqCst);
                        let handler = handler.clone();
                        let counters = tcp_counters.clone();

                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut query_buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query_buf).await.is_err() {
                                return;
                            }
                            counters.queries.lock().unwrap().push(query_buf.clone());

                            let Ok(query) = Message::from_vec(&query_buf) else { return };
                            match handler(&query, TransportProtocol::Tcp) {
                                Some(response) => {
                                    let bytes = response.to_bytes().unwrap();
                                    let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&bytes).await;
                                }
                                None => {
                                    // hold the connection open without answering
                                    let mut sink = [0u8; 1];
                                    let _ = stream.read(&mut sink).await;
                                }
                            }
                        });
                    }
                }
            }
        });

        Self {
            addr,
            counters,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn udp_queries(&self) -> usize {
        self.counters.udp.load(Ordering::SeqCst)
    }

    pub fn tcp_connections(&self) -> usize {
        self.counters.tcp.load(Ordering::SeqCst)
    }

    /// Raw query bytes in arrival order, UDP and TCP alike.
    pub fn received(&self) -> Vec<Vec<u8>> {
        self.counters.queries.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// UDP socket that counts datagrams and never replies.
pub struct SilentUdpServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl SilentUdpServer {
    pub async fn start() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if result.is_ok() {
                            counter.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                }
            }
        });

        Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}

impl Drop for SilentUdpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn bind_pair() -> (UdpSocket, TcpListener) {
    for _ in 0..20 {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = udp.local_addr().unwrap().port();
        if let Ok(tcp) = TcpListener::bind(("127.0.0.1", port)).await {
            return (udp, tcp);
        }
    }
    panic!("no loopback port free for both UDP and TCP");
}
