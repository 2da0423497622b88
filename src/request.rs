//! Request/response boundary.
//!
//! Hosts (CLI, web handler, service) map user input 1:1 onto these request
//! shapes and call the `calculate_*` functions. Validation happens here,
//! before derivation; a rejected request carries the error kind and the
//! offending field, and never affects later requests.

use serde::Deserialize;

use crate::calc::{v4, v6, NetworkInfoV4, NetworkInfoV6};
use crate::error::CalcError;
use crate::models::{addr, IpFamily, SubnetMask};
use crate::validate;

/// An IPv4 calculation request: an address plus either a dotted subnet
/// mask or a prefix length (exactly one of the two).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestV4 {
    pub address: String,
    #[serde(default)]
    pub subnet_mask: Option<String>,
    #[serde(default)]
    pub prefix_length: Option<u8>,
}

/// An IPv6 calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestV6 {
    pub address: String,
    pub prefix_length: u8,
}

/// A calculation request, tagged by address family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Request {
    V4(RequestV4),
    V6(RequestV6),
}

/// A calculation result, tagged by address family.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum NetworkInfo {
    V4(NetworkInfoV4),
    V6(NetworkInfoV6),
}

/// Validate and run a request of either family.
pub fn calculate(request: &Request) -> Result<NetworkInfo, CalcError> {
    match request {
        Request::V4(req) => calculate_v4(req).map(NetworkInfo::V4),
        Request::V6(req) => calculate_v6(req).map(NetworkInfo::V6),
    }
}

/// Validate an IPv4 request and derive its network information.
pub fn calculate_v4(req: &RequestV4) -> Result<NetworkInfoV4, CalcError> {
    log::debug!("calculate_v4({req:?})");
    if !validate::is_valid_address(&req.address, IpFamily::V4) {
        return Err(CalcError::MalformedAddress {
            family: IpFamily::V4,
            field: "address",
            text: req.address.clone(),
        });
    }
    let mask = match (&req.subnet_mask, req.prefix_length) {
        (Some(text), None) => SubnetMask::from_text(text, "subnet_mask")?,
        (None, Some(prefix)) => {
            if !validate::is_valid_prefix(prefix, IpFamily::V4) {
                return Err(CalcError::InvalidPrefix {
                    family: IpFamily::V4,
                    field: "prefix_length",
                    prefix,
                });
            }
            SubnetMask::from_prefix(prefix)?
        }
        _ => return Err(CalcError::AmbiguousRequest),
    };
    // A mask must also satisfy the prefix range, so /0 text is rejected too.
    if !validate::is_valid_prefix(mask.prefix(), IpFamily::V4) {
        return Err(CalcError::InvalidPrefix {
            family: IpFamily::V4,
            field: "subnet_mask",
            prefix: mask.prefix(),
        });
    }
    let address = addr::parse_v4(&req.address, "address")?;
    Ok(v4::derive(address, &mask))
}

/// Validate an IPv6 request and derive its network information.
pub fn calculate_v6(req: &RequestV6) -> Result<NetworkInfoV6, CalcError> {
    log::debug!("calculate_v6({req:?})");
    if !validate::is_valid_address(&req.address, IpFamily::V6) {
        return Err(CalcError::MalformedAddress {
            family: IpFamily::V6,
            field: "address",
            text: req.address.clone(),
        });
    }
    if !validate::is_valid_prefix(req.prefix_length, IpFamily::V6) {
        return Err(CalcError::InvalidPrefix {
            family: IpFamily::V6,
            field: "prefix_length",
            prefix: req.prefix_length,
        });
    }
    let address = addr::parse_v6(&req.address, "address")?;
    Ok(v6::derive(address, req.prefix_length))
}
