//! JSON rendering of calculation results.

use serde::Serialize;

/// Pretty-printed JSON for any result record.
pub fn to_json<T: Serialize>(info: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(info)
}
