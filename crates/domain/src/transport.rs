use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "UDP",
            TransportProtocol::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.protocol_name())
    }
}

/// How queries reach the servers under test.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// UDP first, re-sent over TCP when the answer comes back truncated.
    #[default]
    #[serde(rename = "udp")]
    UdpWithTcpFallback,

    #[serde(rename = "tcp")]
    TcpOnly,
}

impl TransportMode {
    pub fn initial_protocol(&self) -> TransportProtocol {
        match self {
            TransportMode::UdpWithTcpFallback => TransportProtocol::Udp,
            TransportMode::TcpOnly => TransportProtocol::Tcp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UdpWithTcpFallback => "udp",
            Self::TcpOnly => "tcp",
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    #[default]
    Any,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::Ipv4 => addr.is_ipv4(),
            AddressFamily::Ipv6 => addr.is_ipv6(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressFamily::Any => "Unspec",
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
