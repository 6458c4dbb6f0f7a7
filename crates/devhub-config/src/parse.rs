// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient decoding of plugin configuration fragments.
//!
//! One malformed entry must not take the rest of a plugin, or other plugins,
//! down with it. Entries that fail to decode are dropped and logged.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Decode a category list. A missing or `null` value is an empty list; any
/// other non-array value is logged and treated as empty.
pub(crate) fn list<T: DeserializeOwned>(scope: &str, category: &str, value: Option<&Value>) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| entry(scope, category, Some(index), item))
            .collect(),
        Some(other) => {
            warn!(
                scope,
                category,
                found = value_kind(other),
                "plugin config category is not a list; ignoring it"
            );
            Vec::new()
        }
    }
}

/// Decode a single entry, logging and discarding it on failure.
pub(crate) fn entry<T: DeserializeOwned>(
    scope: &str,
    category: &str,
    index: Option<usize>,
    value: &Value,
) -> Option<T> {
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(error) => {
            warn!(scope, category, index, %error, "dropping malformed plugin config entry");
            None
        }
    }
}

/// `deserialize_with` helper: an optional nested value that decodes to `None`
/// instead of failing its parent.
pub(crate) fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(error) => {
            warn!(%error, "ignoring malformed nested plugin config value");
            Ok(None)
        }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
