//! Human-readable rendering of calculation results.
//!
//! Field order is fixed and part of the contract with callers that display
//! the lines verbatim.

use colored::Colorize;
use itertools::Itertools;

use crate::calc::{NetworkInfoV4, NetworkInfoV6};
use crate::request::NetworkInfo;

fn fields_v4(info: &NetworkInfoV4) -> Vec<(&'static str, String)> {
    let range = if info.usable_range_start == info.usable_range_end {
        info.usable_range_start.to_string()
    } else {
        format!("{} - {}", info.usable_range_start, info.usable_range_end)
    };
    vec![
        ("IP Address", info.ip_address.to_string()),
        ("Network Address", info.network_address.to_string()),
        ("Usable Host IP Range", range),
        ("Total Number of Hosts", info.total_hosts.to_string()),
        ("Number of Usable Hosts", info.usable_hosts.to_string()),
        ("Subnet Mask", info.subnet_mask.to_string()),
        ("Wildcard Mask", info.wildcard_mask.to_string()),
        ("Binary Subnet Mask", info.binary_subnet_mask.clone()),
        ("IP Class", info.ip_class.to_string()),
        ("CIDR Notation", format!("/{}", info.cidr_notation)),
        (
            "IP Type",
            if info.is_private { "Private" } else { "Public" }.to_string(),
        ),
        ("Broadcast Address", info.broadcast_address.to_string()),
        ("in-addr.arpa", info.reverse_dns.clone()),
    ]
}

fn fields_v6(info: &NetworkInfoV6) -> Vec<(&'static str, String)> {
    vec![
        (
            "IP Address",
            crate::models::addr::render_v6(info.ip_address),
        ),
        ("Full IP Address", info.full_address.clone()),
        ("Total IP Addresses", info.total_addresses.to_string()),
        (
            "Network",
            crate::models::addr::render_v6(info.network_address),
        ),
        (
            "IP Range",
            format!(
                "{} - {}",
                crate::models::addr::render_v6(info.range_start),
                crate::models::addr::render_v6(info.range_end)
            ),
        ),
    ]
}

fn join(fields: Vec<(&'static str, String)>) -> String {
    fields
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .join("\n")
}

/// IPv4 result lines in presentation order.
pub fn format_v4(info: &NetworkInfoV4) -> String {
    join(fields_v4(info))
}

/// IPv6 result lines in presentation order.
pub fn format_v6(info: &NetworkInfoV6) -> String {
    join(fields_v6(info))
}

/// Result lines for either family.
pub fn format(info: &NetworkInfo) -> String {
    match info {
        NetworkInfo::V4(info) => format_v4(info),
        NetworkInfo::V6(info) => format_v6(info),
    }
}

/// Print the result to stdout with colored labels.
pub fn print(info: &NetworkInfo) {
    let fields = match info {
        NetworkInfo::V4(info) => fields_v4(info),
        NetworkInfo::V6(info) => fields_v6(info),
    };
    for (label, value) in fields {
        println!("{}: {}", label.cyan(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{calculate_v4, calculate_v6, RequestV4, RequestV6};

    #[test]
    fn test_format_v4_field_order() {
        let info = calculate_v4(&RequestV4 {
            address: "192.168.1.10".to_string(),
            subnet_mask: None,
            prefix_length: Some(24),
        })
        .unwrap();
        assert_eq!(
            format_v4(&info),
            "IP Address: 192.168.1.10\n\
             Network Address: 192.168.1.0\n\
             Usable Host IP Range: 192.168.1.1 - 192.168.1.254\n\
             Total Number of Hosts: 254\n\
             Number of Usable Hosts: 252\n\
             Subnet Mask: 255.255.255.0\n\
             Wildcard Mask: 0.0.0.255\n\
             Binary Subnet Mask: 11111111.11111111.11111111.00000000\n\
             IP Class: C\n\
             CIDR Notation: /24\n\
             IP Type: Private\n\
             Broadcast Address: 192.168.1.255\n\
             in-addr.arpa: 10.1.168.192.in-addr.arpa"
        );
    }

    #[test]
    fn test_format_v4_single_address_range() {
        let info = calculate_v4(&RequestV4 {
            address: "8.8.8.8".to_string(),
            subnet_mask: None,
            prefix_length: Some(32),
        })
        .unwrap();
        let text = format_v4(&info);
        assert!(text.contains("Usable Host IP Range: 8.8.8.8\n"));
        assert!(text.contains("IP Type: Public\n"));
    }

    #[test]
    fn test_format_v6_field_order() {
        let info = calculate_v6(&RequestV6 {
            address: "2001:0db8:0000:0000:0000:0000:0000:0001".to_string(),
            prefix_length: 64,
        })
        .unwrap();
        assert_eq!(
            format_v6(&info),
            "IP Address: 2001:0db8:0000:0000:0000:0000:0000:0001\n\
             Full IP Address: 2001:0db8:0000:0000:0000:0000:0000:0001\n\
             Total IP Addresses: 18446744073709551616\n\
             Network: 2001:0db8:0000:0000:0000:0000:0000:0000\n\
             IP Range: 2001:0db8:0000:0000:0000:0000:0000:0000 - 2001:0db8:0000:0000:ffff:ffff:ffff:ffff"
        );
    }
}
