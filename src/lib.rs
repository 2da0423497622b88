// cargo watch -x 'fmt' -x 'run -- 192.168.1.10/24'

pub mod calc;
pub mod error;
pub mod models;
pub mod output;
pub mod request;
pub mod validate;

pub use calc::{NetworkInfoV4, NetworkInfoV6};
pub use error::CalcError;
pub use models::{IpFamily, SubnetMask};
pub use request::{
    calculate, calculate_v4, calculate_v6, NetworkInfo, Request, RequestV4, RequestV6,
};

use std::error::Error;

/// Build a request from CLI arguments: an optional `--json` switch plus
/// either `<address>/<prefix>` or, for IPv4, `<address> <subnet-mask>`.
/// The family is picked by the presence of `:` in the address.
pub fn parse_args(args: &[String]) -> Result<(Request, bool), Box<dyn Error>> {
    let mut json = false;
    let mut rest: Vec<&str> = Vec::new();
    for arg in args {
        if arg == "--json" {
            json = true;
        } else {
            rest.push(arg);
        }
    }
    let request = match rest.as_slice() {
        [target] => {
            let (address, prefix_text) = target
                .split_once('/')
                .ok_or("expected <address>/<prefix> or <address> <subnet-mask>")?;
            let prefix_length: u8 = prefix_text
                .parse()
                .map_err(|_| format!("invalid prefix length: {prefix_text}"))?;
            if address.contains(':') {
                Request::V6(RequestV6 {
                    address: address.to_string(),
                    prefix_length,
                })
            } else {
                Request::V4(RequestV4 {
                    address: address.to_string(),
                    subnet_mask: None,
                    prefix_length: Some(prefix_length),
                })
            }
        }
        [address, mask] => Request::V4(RequestV4 {
            address: address.to_string(),
            subnet_mask: Some(mask.to_string()),
            prefix_length: None,
        }),
        _ => {
            return Err(
                "usage: ip-subnet-calc [--json] <address>/<prefix> | <address> <subnet-mask>"
                    .into(),
            )
        }
    };
    Ok((request, json))
}

/// Run one CLI invocation: parse the arguments, calculate, print.
pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (request, json) = parse_args(args)?;
    let info = request::calculate(&request)?;
    if json {
        println!("{}", output::to_json(&info)?);
    } else {
        output::print(&info);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_v4_prefix() {
        let (request, json) = parse_args(&args(&["192.168.1.10/24"])).unwrap();
        assert!(!json);
        assert_eq!(
            request,
            Request::V4(RequestV4 {
                address: "192.168.1.10".to_string(),
                subnet_mask: None,
                prefix_length: Some(24),
            })
        );
    }

    #[test]
    fn test_parse_args_v4_mask() {
        let (request, _) = parse_args(&args(&["192.168.1.10", "255.255.255.0"])).unwrap();
        assert_eq!(
            request,
            Request::V4(RequestV4 {
                address: "192.168.1.10".to_string(),
                subnet_mask: Some("255.255.255.0".to_string()),
                prefix_length: None,
            })
        );
    }

    #[test]
    fn test_parse_args_v6() {
        let (request, json) = parse_args(&args(&[
            "--json",
            "2001:0db8:0000:0000:0000:0000:0000:0001/64",
        ]))
        .unwrap();
        assert!(json);
        assert_eq!(
            request,
            Request::V6(RequestV6 {
                address: "2001:0db8:0000:0000:0000:0000:0000:0001".to_string(),
                prefix_length: 64,
            })
        );
    }

    #[test]
    fn test_parse_args_rejects_garbage() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["192.168.1.10"])).is_err());
        assert!(parse_args(&args(&["192.168.1.10/abc"])).is_err());
        assert!(parse_args(&args(&["a", "b", "c"])).is_err());
    }
}
