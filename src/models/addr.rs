//! Textual address codec.
//!
//! Parses dotted-decimal IPv4 and full (uncompressed) colon-hex IPv6 text
//! into `std::net` address types, and renders them back to canonical form.
//! The compressed `::` IPv6 form is deliberately not accepted.

use std::net::{Ipv4Addr, Ipv6Addr};

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::CalcError;

lazy_static! {
    static ref RE_V4: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
    static ref RE_V6: Regex =
        Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$").expect("Invalid Regex?");
}

/// Address family selector for the codec and validator functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IpFamily {
    V4,
    V6,
}

impl std::fmt::Display for IpFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Parse dotted-decimal IPv4 text: four dot-separated octets 0-255.
pub fn parse_v4(text: &str, field: &'static str) -> Result<Ipv4Addr, CalcError> {
    let caps = RE_V4
        .captures(text)
        .ok_or_else(|| malformed(IpFamily::V4, field, text))?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1]
            .parse()
            .map_err(|_| malformed(IpFamily::V4, field, text))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parse full colon-hex IPv6 text: eight colon-separated groups of 1-4 hex
/// digits, no `::` compression.
pub fn parse_v6(text: &str, field: &'static str) -> Result<Ipv6Addr, CalcError> {
    if !RE_V6.is_match(text) {
        return Err(malformed(IpFamily::V6, field, text));
    }
    let mut groups = [0u16; 8];
    for (i, group) in text.split(':').enumerate() {
        groups[i] = u16::from_str_radix(group, 16)
            .map_err(|_| malformed(IpFamily::V6, field, text))?;
    }
    Ok(Ipv6Addr::from(groups))
}

/// Canonical dotted-decimal rendering.
pub fn render_v4(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Canonical full rendering: eight lowercase zero-padded hex groups.
pub fn render_v6(addr: Ipv6Addr) -> String {
    addr.segments().iter().map(|g| format!("{g:04x}")).join(":")
}

fn malformed(family: IpFamily, field: &'static str, text: &str) -> CalcError {
    CalcError::MalformedAddress {
        family,
        field,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v4() {
        assert_eq!(
            parse_v4("192.168.1.10", "address").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(
            parse_v4("0.0.0.0", "address").unwrap(),
            Ipv4Addr::new(0, 0, 0, 0)
        );
        assert_eq!(
            parse_v4("255.255.255.255", "address").unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
    }

    #[test]
    fn test_parse_v4_rejects() {
        assert!(parse_v4("192.168.1", "address").is_err());
        assert!(parse_v4("192.168.1.10.5", "address").is_err());
        assert!(parse_v4("192.168.1.256", "address").is_err());
        assert!(parse_v4("192.168.one.10", "address").is_err());
        assert!(parse_v4(" 192.168.1.10", "address").is_err());
        assert!(parse_v4("", "address").is_err());
    }

    #[test]
    fn test_parse_v4_error_names_field() {
        let err = parse_v4("10.0.0.999", "address").unwrap_err();
        assert_eq!(
            err,
            CalcError::MalformedAddress {
                family: IpFamily::V4,
                field: "address",
                text: "10.0.0.999".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_v6() {
        let addr = parse_v6("2001:0db8:0000:0000:0000:0000:0000:0001", "address").unwrap();
        assert_eq!(addr.segments(), [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
        // Groups may be 1-4 digits wide.
        let addr = parse_v6("2001:db8:0:0:0:0:0:1", "address").unwrap();
        assert_eq!(addr.segments(), [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_parse_v6_rejects_compressed() {
        assert!(parse_v6("2001:db8::1", "address").is_err());
        assert!(parse_v6("::1", "address").is_err());
        assert!(parse_v6("::", "address").is_err());
    }

    #[test]
    fn test_parse_v6_rejects() {
        assert!(parse_v6("2001:db8:0:0:0:0:1", "address").is_err()); // 7 groups
        assert!(parse_v6("2001:db8:0:0:0:0:0:0:1", "address").is_err()); // 9 groups
        assert!(parse_v6("2001:db8:0:0:0:0:0:12345", "address").is_err()); // 5 digits
        assert!(parse_v6("2001:db8:0:0:0:0:0:xyzw", "address").is_err());
        assert!(parse_v6("192.168.1.1", "address").is_err());
    }

    #[test]
    fn test_render_v4() {
        assert_eq!(render_v4(Ipv4Addr::new(10, 0, 0, 1)), "10.0.0.1");
    }

    #[test]
    fn test_render_v6_zero_padded_lowercase() {
        let addr = Ipv6Addr::from([0x2001, 0x0db8, 0, 0, 0xFFFF, 0, 0, 1]);
        assert_eq!(render_v6(addr), "2001:0db8:0000:0000:ffff:0000:0000:0001");
    }

    #[test]
    fn test_round_trip() {
        let v4 = Ipv4Addr::new(172, 16, 254, 3);
        assert_eq!(parse_v4(&render_v4(v4), "address").unwrap(), v4);

        let v6 = Ipv6Addr::from([0xfe80, 0, 0x1234, 0, 0, 0, 0xabcd, 0x1]);
        assert_eq!(parse_v6(&render_v6(v6), "address").unwrap(), v6);
    }
}
