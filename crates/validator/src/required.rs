//! Required-keys check over a flat JSON object.
//!
//! Independent of declarations and the registry: every key whose value is
//! an empty string yields one entry.

use serde_json::{Map, Value};

use crate::error::ErrorEntry;

/// Rule name used for required-key entries.
pub const REQUIRED_KEY_RULE: &str = "required";

/// Message used for required-key entries.
pub const REQUIRED_KEY_MESSAGE: &str = "No field provided";

/// Reports every key of `data` mapped to an empty string, in map order.
/// Values of any other type are ignored.
pub fn check_required_keys(data: &Map<String, Value>) -> Vec<ErrorEntry> {
    data.iter()
        .filter(|(_, value)| value.as_str().is_some_and(str::is_empty))
        .map(|(key, _)| ErrorEntry::new(key.as_str(), REQUIRED_KEY_RULE, REQUIRED_KEY_MESSAGE))
        .collect()
}
