//! IPv4 subnet mask and prefix-length conversion.

use std::net::Ipv4Addr;

use itertools::Itertools;

use crate::error::CalcError;
use crate::models::addr;
use crate::models::IpFamily;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_PREFIX_V4: u8 = 32;
/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_PREFIX_V6: u8 = 128;

/// A canonical IPv4 subnet mask paired with its prefix length.
///
/// The two representations are always consistent: constructing from a
/// prefix computes the mask, constructing from mask text computes the
/// prefix. The mask bits are one contiguous run of ones followed by zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetMask {
    addr: Ipv4Addr,
    prefix: u8,
}

impl SubnetMask {
    /// Build the mask with the top `prefix` bits set.
    ///
    /// `prefix` 0 yields `0.0.0.0`, 32 yields `255.255.255.255`.
    pub fn from_prefix(prefix: u8) -> Result<SubnetMask, CalcError> {
        if prefix > MAX_PREFIX_V4 {
            return Err(CalcError::InvalidPrefix {
                family: IpFamily::V4,
                field: "prefix_length",
                prefix,
            });
        }
        let right_len = MAX_PREFIX_V4 - prefix;
        let all_bits = u32::MAX as u64;
        let bits = ((all_bits >> right_len) << right_len) as u32;
        Ok(SubnetMask {
            addr: Ipv4Addr::from(bits),
            prefix,
        })
    }

    /// Parse dotted-decimal mask text, e.g. `255.255.255.0`.
    ///
    /// Non-contiguous masks such as `255.0.255.0` are rejected, so
    /// counting the set bits gives the prefix length.
    pub fn from_text(text: &str, field: &'static str) -> Result<SubnetMask, CalcError> {
        let addr = addr::parse_v4(text, field).map_err(|_| CalcError::InvalidMask {
            field,
            text: text.to_string(),
        })?;
        let bits = u32::from(addr);
        if bits.count_ones() != bits.leading_ones() {
            return Err(CalcError::InvalidMask {
                field,
                text: text.to_string(),
            });
        }
        Ok(SubnetMask {
            addr,
            prefix: bits.count_ones() as u8,
        })
    }

    /// The prefix length, i.e. the number of leading one bits.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The mask as an address value.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The mask as a 32-bit integer.
    pub fn bits(&self) -> u32 {
        u32::from(self.addr)
    }

    /// The wildcard mask, the bitwise complement of the mask.
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.bits())
    }

    /// Each mask octet as an 8-character binary string, dot-joined.
    pub fn to_binary_string(&self) -> String {
        self.addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.addr)
    }
}
