//! LAN-visible address detection.
//!
//! # Responsibilities
//! - Discover the address other devices on the local network can reach
//! - Fall back to `localhost` when the machine has no usable route
//!
//! # Design Decisions
//! - A UDP socket is connected to a well-known external address purely to
//!   select the outbound interface; no packet is ever sent
//! - Detection failure is never fatal

use std::fmt;
use std::net::{IpAddr, UdpSocket};

/// External address used to pick the outbound interface.
const PROBE_ADDR: &str = "8.8.8.8:80";

/// Host identifier advertised when detection fails.
const FALLBACK_HOST: &str = "localhost";

/// A host identifier usable both in certificate SAN lists and in
/// display URLs.
///
/// The distinction matters when rendering a certificate request: an IP
/// address becomes an `IP.n` SAN entry, a DNS name a `DNS.n` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAddr {
    Ip(IpAddr),
    Dns(String),
}

impl HostAddr {
    /// Whether this identifier is a numeric IP address.
    pub fn is_ip(&self) -> bool {
        matches!(self, HostAddr::Ip(_))
    }
}

impl fmt::Display for HostAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAddr::Ip(ip) => write!(f, "{ip}"),
            HostAddr::Dns(name) => write!(f, "{name}"),
        }
    }
}

/// Detect the LAN-visible address of this machine.
///
/// Returns the local address a UDP socket binds when routed towards
/// [`PROBE_ADDR`], or the `localhost` fallback if the machine has no
/// usable network route.
pub fn detect() -> HostAddr {
    match probe() {
        Some(ip) => HostAddr::Ip(ip),
        None => HostAddr::Dns(FALLBACK_HOST.to_string()),
    }
}

fn probe() -> Option<IpAddr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    Some(socket.local_addr().ok()?.ip())
}
