//! IPv6 network information derivation.

use std::net::Ipv6Addr;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

use crate::models::addr;

/// Derived network information for one IPv6 (address, prefix) pair.
///
/// IPv6 has no subnet mask, address class or private/public split; the
/// record carries the block size and range instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfoV6 {
    pub ip_address: Ipv6Addr,
    pub full_address: String,
    #[serde(serialize_with = "serialize_biguint")]
    pub total_addresses: BigUint,
    pub network_address: Ipv6Addr,
    pub range_start: Ipv6Addr,
    pub range_end: Ipv6Addr,
    pub cidr_notation: u8,
}

// BigUint's own serde form is an array of digits; render decimal instead.
fn serialize_biguint<S: Serializer>(n: &BigUint, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&n.to_string())
}

/// Derive every field from a validated address and prefix (0..=128).
///
/// The prefix is applied byte-wise: whole bytes before `p/8` are network,
/// the byte at `p/8` keeps its high `p % 8` bits, the rest is host.
pub fn derive(addr: Ipv6Addr, prefix: u8) -> NetworkInfoV6 {
    let octets = addr.octets();
    let full_bytes = usize::from(prefix / 8);
    let extra_bits = prefix % 8;

    let mut start = octets;
    let mut end = octets;
    for i in full_bytes..16 {
        if i == full_bytes && extra_bits != 0 {
            start[i] &= 0xFF << (8 - extra_bits);
            end[i] |= 0xFF >> extra_bits;
        } else {
            start[i] = 0x00;
            end[i] = 0xFF;
        }
    }

    // 2^(128-p) overflows every fixed-width integer at p=0.
    let total_addresses = BigUint::from(2u8).pow(u32::from(128 - prefix));

    NetworkInfoV6 {
        ip_address: addr,
        full_address: addr::render_v6(addr),
        total_addresses,
        network_address: Ipv6Addr::from(start),
        range_start: Ipv6Addr::from(start),
        range_end: Ipv6Addr::from(end),
        cidr_notation: prefix,
    }
}
