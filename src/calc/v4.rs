//! IPv4 network information derivation.

use std::net::Ipv4Addr;

use itertools::Itertools;
use serde::Serialize;

use crate::models::SubnetMask;

/// Derived network information for one IPv4 (address, mask) pair.
///
/// Immutable value record, computed once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfoV4 {
    pub ip_address: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub usable_range_start: Ipv4Addr,
    pub usable_range_end: Ipv4Addr,
    pub total_hosts: u64,
    pub usable_hosts: u64,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub binary_subnet_mask: String,
    pub ip_class: char,
    pub cidr_notation: u8,
    pub is_private: bool,
    pub broadcast_address: Ipv4Addr,
    pub reverse_dns: String,
}

/// Derive every field from a validated address and mask.
///
/// Total over its inputs: callers validate first, nothing here fails.
pub fn derive(addr: Ipv4Addr, mask: &SubnetMask) -> NetworkInfoV4 {
    let prefix = mask.prefix();
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask.bits();
    let broadcast_bits = network_bits | !mask.bits();

    // 2^(32-p) - 2, clamped to zero for /31 and /32.
    let total_hosts = (1u64 << (32 - u32::from(prefix))).saturating_sub(2);
    let usable_hosts = total_hosts.saturating_sub(2);

    // A /32 holds exactly one usable address. Otherwise the bounds use full
    // 32-bit arithmetic so the increment carries across octet boundaries.
    let (start_bits, end_bits) = if prefix == 32 {
        (addr_bits, addr_bits)
    } else {
        (network_bits + 1, broadcast_bits - 1)
    };

    NetworkInfoV4 {
        ip_address: addr,
        network_address: Ipv4Addr::from(network_bits),
        usable_range_start: Ipv4Addr::from(start_bits),
        usable_range_end: Ipv4Addr::from(end_bits),
        total_hosts,
        usable_hosts,
        subnet_mask: mask.addr(),
        wildcard_mask: mask.wildcard(),
        binary_subnet_mask: mask.to_binary_string(),
        ip_class: ip_class(addr),
        cidr_notation: prefix,
        is_private: is_private(addr),
        broadcast_address: Ipv4Addr::from(broadcast_bits),
        reverse_dns: reverse_dns(addr),
    }
}

/// Address class letter, from the first octet of the address itself.
pub fn ip_class(addr: Ipv4Addr) -> char {
    match addr.octets()[0] {
        0..=127 => 'A',
        128..=191 => 'B',
        192..=223 => 'C',
        224..=239 => 'D',
        240..=255 => 'E',
    }
}

/// RFC 1918 private range test, independent of the prefix length.
pub fn is_private(addr: Ipv4Addr) -> bool {
    let [a, b, _, _] = addr.octets();
    a == 10 || (a == 172 && (16..=31).contains(&b)) || (a == 192 && b == 168)
}

/// Reverse-DNS name: octets reversed, dot-joined, `.in-addr.arpa` suffix.
pub fn reverse_dns(addr: Ipv4Addr) -> String {
    format!("{}.in-addr.arpa", addr.octets().iter().rev().join("."))
}
