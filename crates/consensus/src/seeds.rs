//! Seed peers: DNS seed hosts and hard-coded fallback addresses.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use rand::Rng;

pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Raw fallback seed: IPv6 (or IPv4-mapped) address bytes and port.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        Self {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2],
                octets[3],
            ],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        let ip = match ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Unix time the address book should treat as "last seen".
    pub last_seen: i64,
}

/// Converts fallback seeds into address book entries.
///
/// Each entry is back-dated to a random time in `[now - 2 weeks, now - 1 week)`
/// so that a node only leans on them until fresher gossip arrives.
pub fn convert_seed_specs<R: Rng + ?Sized>(
    specs: &[SeedSpec],
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            addr: spec.socket_addr(),
            last_seen: now - ONE_WEEK - rng.gen_range(1..=ONE_WEEK),
        })
        .collect()
}
