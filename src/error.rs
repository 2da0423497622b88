//! Error types for validation and request handling.

use thiserror::Error;

use crate::models::IpFamily;

/// Rejection reasons for a calculation request.
///
/// All validation happens before any derivation, so these are the only
/// failures the library produces; the derivation functions themselves are
/// total over validated inputs. Each variant names the request field that
/// carried the offending value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The text is not a valid address of the given family.
    #[error("malformed {family} address in `{field}`: {text:?}")]
    MalformedAddress {
        family: IpFamily,
        field: &'static str,
        text: String,
    },

    /// The prefix length is outside the family's accepted range.
    #[error("invalid {family} prefix length {prefix} in `{field}`")]
    InvalidPrefix {
        family: IpFamily,
        field: &'static str,
        prefix: u8,
    },

    /// The subnet mask text does not parse, or its bits are not one
    /// contiguous run of ones followed by zeros.
    #[error("invalid subnet mask in `{field}`: {text:?}")]
    InvalidMask { field: &'static str, text: String },

    /// An IPv4 request must carry exactly one of `subnet_mask` or
    /// `prefix_length`.
    #[error("exactly one of `subnet_mask` or `prefix_length` must be supplied")]
    AmbiguousRequest,
}
