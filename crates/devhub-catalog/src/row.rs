// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog table rows.

use devhub_core::entity::DEFAULT_NAMESPACE;
use devhub_core::Entity;

/// Values derived from the entity once per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRow {
    /// `metadata.title`, falling back to `metadata.name`.
    pub name: String,
    /// `kind:namespace/name` with the kind lowercased.
    pub entity_ref: String,
    pub owned_by_relations_title: Option<String>,
    pub part_of_system_relation_title: Option<String>,
}

/// One row of the catalog table.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTableRow {
    pub entity: Entity,
    pub resolved: ResolvedRow,
}

impl CatalogTableRow {
    pub fn from_entity(entity: Entity) -> Self {
        let name = entity.display_name().unwrap_or_default().to_string();
        let entity_ref = format!(
            "{}:{}/{}",
            entity.kind().unwrap_or_default().to_ascii_lowercase(),
            entity.namespace(),
            entity.name().unwrap_or_default()
        );
        let owned_by_relations_title = entity
            .lookup("spec.owner")
            .and_then(|v| v.as_str())
            .map(|owner| humanize_entity_ref(owner, "group"));
        let part_of_system_relation_title = entity
            .lookup("spec.system")
            .and_then(|v| v.as_str())
            .map(|system| humanize_entity_ref(system, "system"));

        Self {
            entity,
            resolved: ResolvedRow {
                name,
                entity_ref,
                owned_by_relations_title,
                part_of_system_relation_title,
            },
        }
    }
}

impl From<Entity> for CatalogTableRow {
    fn from(entity: Entity) -> Self {
        Self::from_entity(entity)
    }
}

/// Shorten `[kind:][namespace/]name`, dropping the kind when it equals
/// `default_kind` and the namespace when it is the default one.
pub fn humanize_entity_ref(reference: &str, default_kind: &str) -> String {
    let (kind, rest) = match reference.split_once(':') {
        Some((kind, rest)) => (Some(kind), rest),
        None => (None, reference),
    };
    let (namespace, name) = match rest.split_once('/') {
        Some((namespace, name)) => (Some(namespace), name),
        None => (None, rest),
    };

    let mut out = String::new();
    if let Some(kind) = kind.filter(|k| !k.eq_ignore_ascii_case(default_kind)) {
        out.push_str(&kind.to_ascii_lowercase());
        out.push(':');
    }
    if let Some(namespace) = namespace.filter(|ns| *ns != DEFAULT_NAMESPACE) {
        out.push_str(namespace);
        out.push('/');
    }
    out.push_str(name);
    out
}
