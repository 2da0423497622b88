//! Network information derivation, one module per address family.
//!
//! [`v4::derive`] and [`v6::derive`] are free functions over immutable
//! inputs, returning fresh records. Callers validate first; derivation
//! never fails.

pub mod v4;
pub mod v6;

pub use v4::NetworkInfoV4;
pub use v6::NetworkInfoV6;
