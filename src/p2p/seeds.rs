//! Seed Node Configuration
//!
//! Bootstrap peers for initial discovery. Every seed is handed out with a
//! randomized "last seen" time between one and two weeks ago, so the peer
//! manager dials one or two of them and learns fresher addresses by gossip
//! instead of connecting to all seeds at once.

use rand::Rng;
use serde::Serialize;
use std::io;
use std::net::{IpAddr, Ipv6Addr, SocketAddr, ToSocketAddrs};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Seconds in one week
pub const ONE_WEEK_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Compiled fixed-seed entry: IPv6 (or IPv4-mapped) address and port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    /// IPv4 seed stored as an IPv4-mapped IPv6 address
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// DNS seed: display name and host to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// A bootstrap peer address with a synthetic last-seen time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// UNIX timestamp, one to two weeks before resolution time
    pub last_seen: i64,
}

/// Host name resolution seam used for DNS seeds
pub trait SeedLookup {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolves through the operating system resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

impl SeedLookup for SystemLookup {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Ok((host, 0).to_socket_addrs()?.map(|addr| addr.ip()).collect())
    }
}

/// Accepts IP literals only; never touches the network
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralLookup;

impl SeedLookup for LiteralLookup {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        host.parse::<IpAddr>()
            .map(|ip| vec![ip])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }
}

/// Current UNIX time in seconds
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Random last-seen time in `(now - 2 weeks, now - 1 week]`
pub fn desynchronized_last_seen<R: Rng + ?Sized>(now: i64, rng: &mut R) -> i64 {
    now - ONE_WEEK_SECONDS - rng.gen_range(0..ONE_WEEK_SECONDS)
}

/// Convert the fixed-seed table into peer addresses
pub fn resolve_fixed(table: &[SeedSpec]) -> Vec<SeedAddress> {
    resolve_fixed_at(table, unix_now(), &mut rand::thread_rng())
}

/// [`resolve_fixed`] with an explicit clock and random source
pub fn resolve_fixed_at<R: Rng + ?Sized>(
    table: &[SeedSpec],
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|seed| SeedAddress {
            addr: seed.socket_addr(),
            last_seen: desynchronized_last_seen(now, rng),
        })
        .collect()
}

/// Resolve DNS seeds through `lookup`, skipping hosts that fail
pub fn resolve_dns(seeds: &[DnsSeed], port: u16, lookup: &dyn SeedLookup) -> Vec<SeedAddress> {
    resolve_dns_at(seeds, port, lookup, unix_now(), &mut rand::thread_rng())
}

/// [`resolve_dns`] with an explicit clock and random source
pub fn resolve_dns_at<R: Rng + ?Sized>(
    seeds: &[DnsSeed],
    port: u16,
    lookup: &dyn SeedLookup,
    now: i64,
    rng: &mut R,
) -> Vec<SeedAddress> {
    let mut resolved = Vec::new();
    for seed in seeds {
        match lookup.lookup(seed.host) {
            Ok(ips) => {
                debug!(seed = seed.name, count = ips.len(), "Resolved DNS seed");
                resolved.extend(ips.into_iter().map(|ip| SeedAddress {
                    addr: SocketAddr::new(ip, port),
                    last_seen: desynchronized_last_seen(now, rng),
                }));
            }
            Err(e) => warn!(seed = seed.name, error = %e, "DNS seed lookup failed"),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TABLE: &[SeedSpec] = &[
        SeedSpec::ipv4([140, 82, 48, 162], 1112),
        SeedSpec::ipv4([8, 9, 36, 49], 1112),
    ];

    #[test]
    fn test_ipv4_mapped_seed_addr() {
        assert_eq!(TABLE[0].socket_addr().to_string(), "140.82.48.162:1112");
    }

    #[test]
    fn test_ipv6_seed_addr() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 1;
        let seed = SeedSpec { addr, port: 9 };
        assert_eq!(seed.socket_addr().to_string(), "[2001::1]:9");
    }

    #[test]
    fn test_fixed_seed_timestamps_in_window() {
        let now = 1_700_000_000;
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = resolve_fixed_at(TABLE, now, &mut rng);
        assert_eq!(seeds.len(), 2);
        for seed in seeds {
            assert!(seed.last_seen <= now - ONE_WEEK_SECONDS);
            assert!(seed.last_seen > now - 2 * ONE_WEEK_SECONDS);
        }
    }

    #[test]
    fn test_literal_lookup() {
        assert_eq!(
            LiteralLookup.lookup("95.179.140.237").unwrap(),
            vec!["95.179.140.237".parse::<IpAddr>().unwrap()]
        );
        assert!(LiteralLookup.lookup("seed.example.org").is_err());
    }

    #[test]
    fn test_resolve_dns_skips_failures() {
        let seeds = [
            DnsSeed {
                name: "good",
                host: "8.9.36.49",
            },
            DnsSeed {
                name: "bad",
                host: "not-an-ip",
            },
        ];
        let now = 1_700_000_000;
        let mut rng = StdRng::seed_from_u64(1);
        let resolved = resolve_dns_at(&seeds, 1112, &LiteralLookup, now, &mut rng);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].addr.to_string(), "8.9.36.49:1112");
        assert!(resolved[0].last_seen <= now - ONE_WEEK_SECONDS);
    }
}
