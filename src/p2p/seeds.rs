//! Seed Node Configuration
//!
//! Hardcoded bootstrap nodes for initial peer discovery.
//! New nodes connect to these first to discover the rest of the network,
//! after which gossiped addresses with fresher timestamps take over.

use crate::constants::ONE_WEEK;
use rand::Rng;
use serde::Serialize;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// Service bit advertised for full nodes
pub const NODE_NETWORK: u64 = 1;

/// Compact compiled-in seed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    /// IPv6 address, IPv4 nodes use the mapped form
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4-mapped seed record
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        Self {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2], octets[3],
            ],
            port,
        }
    }
}

/// DNS seed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Seed address ready for the address manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub ip: Ipv6Addr,
    pub port: u16,
    pub services: u64,
    /// Synthetic "last seen" time
    pub last_seen: i64,
}

impl SeedAddress {
    /// Socket address, with IPv4-mapped addresses shown as IPv4
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// Turn compact records into seed addresses.
///
/// Each address gets a last-seen time uniformly drawn from
/// `[now - 2 weeks, now - 1 week)`. Call once per profile.
pub fn materialize<R: Rng + ?Sized>(specs: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<SeedAddress> {
    specs
        .iter()
        .map(|spec| SeedAddress {
            ip: Ipv6Addr::from(spec.addr),
            port: spec.port,
            services: NODE_NETWORK,
            last_seen: now - 2 * ONE_WEEK + rng.gen_range(0..ONE_WEEK),
        })
        .collect()
}

/// [`materialize`] against the system clock and thread RNG
pub fn materialize_now(specs: &[SeedSpec6]) -> Vec<SeedAddress> {
    materialize(specs, unix_time(), &mut rand::thread_rng())
}

/// Current UNIX time in seconds
pub fn unix_time() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SPECS: [SeedSpec6; 3] = [
        SeedSpec6::ipv4([140, 82, 48, 162], 8322),
        SeedSpec6::ipv4([8, 9, 36, 49], 8322),
        SeedSpec6 {
            addr: [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            port: 39795,
        },
    ];

    #[test]
    fn test_materialize_preserves_order_and_endpoints() {
        let now = 1_600_000_000;
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = materialize(&SPECS, now, &mut rng);

        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].socket_addr().to_string(), "140.82.48.162:8322");
        assert_eq!(seeds[1].socket_addr().to_string(), "8.9.36.49:8322");
        assert_eq!(seeds[2].socket_addr().to_string(), "[2001:db8::1]:39795");
        for (seed, spec) in seeds.iter().zip(SPECS.iter()) {
            assert_eq!(seed.ip.octets(), spec.addr);
            assert_eq!(seed.port, spec.port);
            assert_eq!(seed.services, NODE_NETWORK);
            assert!(seed.last_seen >= now - 2 * ONE_WEEK);
            assert!(seed.last_seen < now - ONE_WEEK);
        }
    }

    #[test]
    fn test_materialize_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(materialize(&[], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_materialize_now_uses_clock() {
        let before = unix_time();
        let seeds = materialize_now(&SPECS);
        let after = unix_time();
        for seed in seeds {
            assert!(seed.last_seen >= before - 2 * ONE_WEEK);
            assert!(seed.last_seen < after - ONE_WEEK);
        }
    }
}
