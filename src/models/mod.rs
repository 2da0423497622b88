//! Domain models for the IP calculator.
//!
//! - [`IpFamily`] - address family selector
//! - [`addr`] - textual address codec (parse and canonical render)
//! - [`SubnetMask`] - canonical IPv4 subnet mask with prefix length

pub mod addr;
mod mask;

pub use addr::IpFamily;
pub use mask::{SubnetMask, MAX_PREFIX_V4, MAX_PREFIX_V6};
