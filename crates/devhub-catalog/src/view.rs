// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use devhub_core::Entity;

/// The catalog list view the columns are built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    /// Active kind filter, as selected in the view.
    pub kind: Option<String>,
    /// Active `spec.type` filter.
    pub spec_type: Option<String>,
    /// Whether the listed entities live in more than one namespace.
    pub spans_namespaces: bool,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_spec_type(mut self, spec_type: impl Into<String>) -> Self {
        self.spec_type = Some(spec_type.into());
        self
    }

    pub fn with_spans_namespaces(mut self, spans: bool) -> Self {
        self.spans_namespaces = spans;
        self
    }

    /// Derive `spans_namespaces` from the entities being listed.
    pub fn for_entities(kind: Option<&str>, entities: &[Entity]) -> Self {
        let first = entities.first().map(Entity::namespace);
        Self {
            kind: kind.map(str::to_string),
            spec_type: None,
            spans_namespaces: entities.iter().any(|e| Some(e.namespace()) != first),
        }
    }

    pub(crate) fn kind_lowercase(&self) -> Option<String> {
        self.kind.as_deref().map(str::to_ascii_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_namespace_spread() {
        let a = Entity::new(json!({ "metadata": { "name": "a" } }));
        let b = Entity::new(json!({ "metadata": { "name": "b", "namespace": "ops" } }));
        assert!(!ViewContext::for_entities(None, &[a.clone(), a.clone()]).spans_namespaces);
        assert!(ViewContext::for_entities(Some("component"), &[a, b]).spans_namespaces);
        assert!(!ViewContext::for_entities(None, &[]).spans_namespaces);
    }
}
