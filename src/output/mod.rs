//! Output formatting for calculation results.
//!
//! - [`terminal`] - fixed-order human-readable lines, colored printing
//! - [`json`] - JSON rendering

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format, format_v4, format_v6, print};
