// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder for catalog entities.

use devhub_core::Entity;
use serde_json::{json, Map, Value};

/// Builds an entity document field by field.
///
/// ```
/// use devhub_test_utils::EntityBuilder;
///
/// let entity = EntityBuilder::new("Component", "checkout")
///     .spec_type("service")
///     .annotation("custom/tier", "gold")
///     .build();
/// assert_eq!(entity.kind(), Some("Component"));
/// ```
pub struct EntityBuilder {
    kind: String,
    metadata: Map<String, Value>,
    spec: Map<String, Value>,
}

impl EntityBuilder {
    pub fn new(kind: &str, name: &str) -> Self {
        let mut metadata = Map::new();
        metadata.insert("name".into(), json!(name));
        Self {
            kind: kind.to_string(),
            metadata,
            spec: Map::new(),
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.metadata.insert("namespace".into(), json!(namespace));
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.metadata.insert("title".into(), json!(title));
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.metadata.insert("description".into(), json!(description));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.metadata.insert("tags".into(), json!(tags));
        self
    }

    pub fn annotation(mut self, key: &str, value: &str) -> Self {
        let annotations = self
            .metadata
            .entry("annotations")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = annotations {
            map.insert(key.to_string(), json!(value));
        }
        self
    }

    pub fn spec_type(self, spec_type: &str) -> Self {
        self.spec("type", json!(spec_type))
    }

    pub fn owner(self, owner: &str) -> Self {
        self.spec("owner", json!(owner))
    }

    pub fn lifecycle(self, lifecycle: &str) -> Self {
        self.spec("lifecycle", json!(lifecycle))
    }

    pub fn system(self, system: &str) -> Self {
        self.spec("system", json!(system))
    }

    /// Set an arbitrary `spec` field.
    pub fn spec(mut self, key: &str, value: Value) -> Self {
        self.spec.insert(key.to_string(), value);
        self
    }

    pub fn to_value(&self) -> Value {
        json!({
            "apiVersion": "backstage.io/v1alpha1",
            "kind": self.kind,
            "metadata": self.metadata,
            "spec": self.spec,
        })
    }

    pub fn build(self) -> Entity {
        Entity::new(self.to_value())
    }
}
