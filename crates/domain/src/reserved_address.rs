//! Classification of addresses that cannot be geolocated.
//!
//! An address is reserved when it is unparsable, multicast, or falls in one of
//! the special-purpose blocks that are not globally routable.

use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::OnceLock;

const NON_GLOBAL_BLOCKS: &[&str] = &[
    // IPv4
    "0.0.0.0/8",       // "this" network
    "10.0.0.0/8",      // private
    "100.64.0.0/10",   // shared address space
    "127.0.0.0/8",     // loopback
    "169.254.0.0/16",  // link local
    "172.16.0.0/12",   // private
    "192.0.0.0/24",    // IETF protocol assignments
    "192.0.2.0/24",    // TEST-NET-1
    "192.88.99.0/24",  // 6to4 relay anycast
    "192.168.0.0/16",  // private
    "198.18.0.0/15",   // benchmarking
    "198.51.100.0/24", // TEST-NET-2
    "203.0.113.0/24",  // TEST-NET-3
    "224.0.0.0/3",     // multicast, future use, broadcast
    // IPv6
    "::/128",          // unspecified
    "::1/128",         // loopback
    "64:ff9b:1::/48",  // local-use translation
    "100::/64",        // discard-only
    "2001::/23",       // IETF protocol assignments
    "2001:db8::/32",   // documentation
    "2002::/16",       // 6to4
    "3fff::/20",       // documentation
    "5f00::/16",       // segment routing
    "fc00::/7",        // unique local
    "fe80::/10",       // link local
    "ff00::/8",        // multicast
];

fn non_global_networks() -> &'static [IpNetwork] {
    static NETWORKS: OnceLock<Vec<IpNetwork>> = OnceLock::new();
    NETWORKS.get_or_init(|| {
        NON_GLOBAL_BLOCKS
            .iter()
            .filter_map(|cidr| cidr.parse().ok())
            .collect()
    })
}

/// Drops a `/prefix` suffix, e.g. the netmask carried by an EDNS client subnet.
pub fn strip_prefix_length(address: &str) -> &str {
    address.split('/').next().unwrap_or(address)
}

/// Returns true when `address` is unparsable or not globally routable.
pub fn is_reserved(address: &str) -> bool {
    match address.trim().parse::<IpAddr>() {
        Ok(ip) => is_reserved_ip(ip),
        Err(_) => true,
    }
}

pub fn is_reserved_ip(ip: IpAddr) -> bool {
    let ip = match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map(IpAddr::V4).unwrap_or(ip),
        v4 => v4,
    };

    ip.is_multicast() || non_global_networks().iter().any(|net| net.contains(ip))
}
