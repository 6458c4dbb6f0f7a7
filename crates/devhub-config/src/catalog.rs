// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog table column configuration (`catalog.table.columns`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::parse;

/// Column ids accepted by `include` and `exclude`.
pub const COLUMN_IDS: &[&str] = &[
    "name",
    "owner",
    "type",
    "lifecycle",
    "description",
    "tags",
    "namespace",
    "system",
    "createdAt",
];

/// Entity kinds known to the catalog, lowercase.
pub const KNOWN_ENTITY_KINDS: &[&str] = &[
    "api",
    "component",
    "domain",
    "group",
    "location",
    "resource",
    "system",
    "template",
    "user",
];

/// `include`, when non-empty, fully determines the built-in column set and
/// `exclude` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogColumnConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<CustomColumnConfig>>,
}

impl CatalogColumnConfig {
    /// Decode leniently: non-string ids and malformed custom columns are
    /// dropped individually, and a non-map value yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = match value {
            Value::Null => return None,
            Value::Object(obj) => obj,
            other => {
                warn!(found = parse::value_kind(other), "catalog.table.columns is not a map; ignoring it");
                return None;
            }
        };
        Some(Self {
            include: obj.get("include").map(id_list),
            exclude: obj.get("exclude").map(id_list),
            custom: obj
                .get("custom")
                .map(|v| parse::list("catalog.table.columns", "custom", Some(v))),
        })
    }

    /// True when none of `include`, `exclude` or `custom` is declared.
    pub fn is_unset(&self) -> bool {
        self.include.is_none() && self.exclude.is_none() && self.custom.is_none()
    }
}

fn id_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}

/// A user-declared column rendering a field of the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomColumnConfig {
    pub title: String,
    /// Dot/bracket path into the entity, e.g. `metadata.annotations['custom/tier']`.
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<KindFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}

impl CustomColumnConfig {
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
            kind: None,
            default_value: None,
            width: None,
            sortable: None,
        }
    }

    /// Columns sort unless `sortable: false` is given.
    pub fn is_sortable(&self) -> bool {
        self.sortable != Some(false)
    }
}

/// A single kind or a list of kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindFilter {
    One(String),
    Many(Vec<String>),
}

impl KindFilter {
    pub fn kinds(&self) -> Vec<&str> {
        match self {
            KindFilter::One(kind) => vec![kind.as_str()],
            KindFilter::Many(kinds) => kinds.iter().map(String::as_str).collect(),
        }
    }

    /// Case-insensitive match against a view's kind filter.
    pub fn matches(&self, kind: &str) -> bool {
        self.kinds().iter().any(|k| k.eq_ignore_ascii_case(kind))
    }
}
