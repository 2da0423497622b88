//! Input validation.
//!
//! Addresses are validated by parsing and re-rendering: text is accepted
//! only if its canonical rendering is byte-identical to the input. This
//! rejects leading zeros, stray whitespace, uppercase hex groups and any
//! other non-canonical spelling a lenient parser would let through.

use crate::models::{addr, IpFamily, MAX_PREFIX_V4, MAX_PREFIX_V6};

/// True iff `text` is the canonical rendering of an address of `family`.
pub fn is_valid_address(text: &str, family: IpFamily) -> bool {
    match family {
        IpFamily::V4 => addr::parse_v4(text, "address")
            .map(|a| addr::render_v4(a) == text)
            .unwrap_or(false),
        IpFamily::V6 => addr::parse_v6(text, "address")
            .map(|a| addr::render_v6(a) == text)
            .unwrap_or(false),
    }
}

/// Prefix range check: 1..=32 for IPv4, 0..=128 for IPv6.
///
/// The IPv4 lower bound is 1, not 0: a /0 mask is rejected as a usable
/// subnet input.
pub fn is_valid_prefix(prefix: u8, family: IpFamily) -> bool {
    match family {
        IpFamily::V4 => (1..=MAX_PREFIX_V4).contains(&prefix),
        IpFamily::V6 => prefix <= MAX_PREFIX_V6,
    }
}
