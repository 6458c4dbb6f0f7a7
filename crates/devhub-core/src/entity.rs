// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog entity wrapper.
//!
//! Entities arrive from the catalog as arbitrary JSON documents. `Entity`
//! keeps the raw document, so custom columns can address any field, and
//! exposes typed accessors for the few fields predicates and built-in
//! columns read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::path;

/// Namespace assumed when `metadata.namespace` is absent.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A catalog entity (`apiVersion`, `kind`, `metadata`, `spec`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Value);

impl Entity {
    /// Wrap a raw JSON document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The raw document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn kind(&self) -> Option<&str> {
        self.0.get("kind").and_then(Value::as_str)
    }

    /// `spec.type`, when it is a string.
    pub fn spec_type(&self) -> Option<&str> {
        self.0.get("spec")?.get("type")?.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata_str("name")
    }

    /// `metadata.title`, falling back to `metadata.name`.
    pub fn display_name(&self) -> Option<&str> {
        self.metadata_str("title").or_else(|| self.name())
    }

    pub fn namespace(&self) -> &str {
        self.metadata_str("namespace").unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata_str("description")
    }

    /// `metadata.tags` entries that are strings.
    pub fn tags(&self) -> Vec<&str> {
        self.0
            .get("metadata")
            .and_then(|m| m.get("tags"))
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn annotations(&self) -> Option<&Map<String, Value>> {
        self.0.get("metadata")?.get("annotations")?.as_object()
    }

    /// The value of an annotation, when present and a string.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations()?.get(key)?.as_str()
    }

    /// Whether the annotation key is present, whatever its value.
    pub fn has_annotation(&self, key: &str) -> bool {
        self.annotations().is_some_and(|a| a.contains_key(key))
    }

    /// Resolve a dot/bracket field path against the raw document.
    pub fn lookup(&self, field_path: &str) -> Option<&Value> {
        path::lookup(&self.0, field_path)
    }

    /// Resolve a field path and render it as display text.
    pub fn lookup_text(&self, field_path: &str) -> Option<String> {
        self.lookup(field_path).and_then(path::display_value)
    }

    fn metadata_str(&self, key: &str) -> Option<&str> {
        self.0.get("metadata")?.get(key)?.as_str()
    }
}

impl From<Value> for Entity {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Entity {
        Entity::new(json!({
            "apiVersion": "backstage.io/v1alpha1",
            "kind": "Component",
            "metadata": {
                "name": "payments",
                "title": "Payments Service",
                "tags": ["java", 42, "billing"],
                "annotations": { "custom/tier": "" }
            },
            "spec": { "type": "service", "owner": "team-a" }
        }))
    }

    #[test]
    fn typed_accessors() {
        let entity = sample();
        assert_eq!(entity.kind(), Some("Component"));
        assert_eq!(entity.spec_type(), Some("service"));
        assert_eq!(entity.name(), Some("payments"));
        assert_eq!(entity.display_name(), Some("Payments Service"));
        assert_eq!(entity.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(entity.tags(), vec!["java", "billing"]);
    }

    #[test]
    fn annotation_presence_ignores_value() {
        let entity = sample();
        assert!(entity.has_annotation("custom/tier"));
        assert_eq!(entity.annotation("custom/tier"), Some(""));
        assert!(!entity.has_annotation("custom/other"));
    }

    #[test]
    fn accessors_tolerate_missing_sections() {
        let entity = Entity::new(json!({ "kind": 7 }));
        assert_eq!(entity.kind(), None);
        assert_eq!(entity.spec_type(), None);
        assert!(entity.annotations().is_none());
        assert!(entity.tags().is_empty());
    }

    #[test]
    fn lookup_text_through_entity() {
        let entity = sample();
        assert_eq!(entity.lookup_text("spec.owner"), Some("team-a".into()));
        assert_eq!(entity.lookup_text("spec.nonexistent"), None);
    }
}
