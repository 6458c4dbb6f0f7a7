// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in catalog columns and the platform default column set.

use devhub_core::Entity;
use serde_json::Value;

use crate::column::Column;
use crate::view::ViewContext;

pub fn name_column() -> Column {
    Column::new("Name", "resolved.name", |row| row.resolved.name.clone())
        .with_id("name")
        .with_custom_sort(|a, b| {
            a.resolved
                .name
                .to_lowercase()
                .cmp(&b.resolved.name.to_lowercase())
        })
}

pub fn owner_column() -> Column {
    Column::new("Owner", "resolved.ownedByRelationsTitle", |row| {
        row.resolved.owned_by_relations_title.clone().unwrap_or_default()
    })
    .with_id("owner")
}

pub fn system_column() -> Column {
    Column::new("System", "resolved.partOfSystemRelationTitle", |row| {
        row.resolved
            .part_of_system_relation_title
            .clone()
            .unwrap_or_default()
    })
    .with_id("system")
}

pub fn spec_type_column() -> Column {
    Column::new("Type", "entity.spec.type", |row| {
        row.entity.spec_type().unwrap_or_default().to_string()
    })
    .with_id("type")
}

pub fn lifecycle_column() -> Column {
    Column::new("Lifecycle", "entity.spec.lifecycle", |row| text(&row.entity, "spec.lifecycle")).with_id("lifecycle")
}

pub fn description_column() -> Column {
    Column::new("Description", "entity.metadata.description", |row| {
        row.entity.description().unwrap_or_default().to_string()
    })
    .with_id("description")
}

pub fn tags_column() -> Column {
    let mut column = Column::new("Tags", "entity.metadata.tags", |row| row.entity.tags().join(", "))
        .with_id("tags");
    column.sorting = Some(false);
    column
}

pub fn namespace_column() -> Column {
    Column::new("Namespace", "entity.metadata.namespace", |row| {
        row.entity.namespace().to_string()
    })
    .with_id("namespace")
}

/// Location targets. Not addressable by `include`/`exclude`.
pub fn targets_column() -> Column {
    Column::new("Targets", "entity.spec.targets", |row| {
        let mut targets: Vec<String> = row
            .entity
            .lookup("spec.targets")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default();
        if let Some(target) = row.entity.lookup("spec.target").and_then(Value::as_str) {
            targets.push(target.to_string());
        }
        targets.join(", ")
    })
}

/// Look up a built-in column by id. `createdAt` is handled by the composer.
pub fn builtin_column(id: &str) -> Option<Column> {
    let column = match id {
        "name" => name_column(),
        "owner" => owner_column(),
        "type" => spec_type_column(),
        "lifecycle" => lifecycle_column(),
        "description" => description_column(),
        "tags" => tags_column(),
        "namespace" => namespace_column(),
        "system" => system_column(),
        _ => return None,
    };
    Some(column)
}

/// The platform default columns for a view.
pub fn default_columns(view: &ViewContext) -> Vec<Column> {
    let mut columns = vec![name_column()];
    columns.extend(kind_columns(view));
    columns.push(description_column());
    columns.push(tags_column());
    columns
}

fn kind_columns(view: &ViewContext) -> Vec<Column> {
    let type_hidden = view.spec_type.is_some();
    match view.kind_lowercase().as_deref() {
        Some("user") => vec![],
        Some("domain" | "system") => vec![owner_column()],
        Some("group" | "template") => vec![spec_type_column().hidden(type_hidden)],
        Some("location") => vec![spec_type_column().hidden(type_hidden), targets_column()],
        _ => {
            let mut columns = vec![
                system_column(),
                owner_column(),
                spec_type_column().hidden(type_hidden),
                lifecycle_column(),
            ];
            if view.spans_namespaces {
                columns.insert(1, namespace_column());
            }
            columns
        }
    }
}

fn text(entity: &Entity, path: &str) -> String {
    entity.lookup_text(path).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::CatalogTableRow;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn titles(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn generic_view_defaults() {
        let columns = default_columns(&ViewContext::new().with_kind("component"));
        assert_eq!(
            titles(&columns),
            vec!["Name", "System", "Owner", "Type", "Lifecycle", "Description", "Tags"]
        );
        assert!(columns.iter().all(|c| !c.hidden));
    }

    #[test]
    fn namespace_column_follows_system_when_spanning() {
        let columns = default_columns(&ViewContext::new().with_spans_namespaces(true));
        assert_eq!(
            titles(&columns),
            vec!["Name", "System", "Namespace", "Owner", "Type", "Lifecycle", "Description", "Tags"]
        );
    }

    #[test]
    fn kind_specific_defaults() {
        let for_kind = |kind: &str| {
            default_columns(&ViewContext::new().with_kind(kind))
                .iter()
                .map(|c| c.title.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(for_kind("User"), vec!["Name", "Description", "Tags"]);
        assert_eq!(for_kind("system"), vec!["Name", "Owner", "Description", "Tags"]);
        assert_eq!(for_kind("domain"), vec!["Name", "Owner", "Description", "Tags"]);
        assert_eq!(for_kind("group"), vec!["Name", "Type", "Description", "Tags"]);
        assert_eq!(for_kind("template"), vec!["Name", "Type", "Description", "Tags"]);
        assert_eq!(for_kind("location"), vec!["Name", "Type", "Targets", "Description", "Tags"]);
    }

    #[test]
    fn type_is_hidden_under_a_type_filter() {
        let columns = default_columns(&ViewContext::new().with_kind("component").with_spec_type("service"));
        let spec_type = columns.iter().find(|c| c.title == "Type").unwrap();
        assert!(spec_type.hidden);
    }

    #[test]
    fn builtin_lookup_covers_every_id_but_created_at() {
        for id in ["name", "owner", "type", "lifecycle", "description", "tags", "namespace", "system"] {
            assert_eq!(builtin_column(id).and_then(|c| c.id), Some(id.to_string()));
        }
        assert!(builtin_column("createdAt").is_none());
        assert!(builtin_column("bogus").is_none());
    }

    #[test]
    fn renders_entity_fields() {
        let row = CatalogTableRow::from_entity(Entity::new(json!({
            "kind": "Location",
            "metadata": { "name": "repo", "description": "Repo index", "tags": ["a", "b"] },
            "spec": { "type": "url", "lifecycle": "production", "targets": ["./a.yaml"], "target": "./b.yaml", "owner": "team-a" }
        })));
        assert_eq!(description_column().render(&row), "Repo index");
        assert_eq!(tags_column().render(&row), "a, b");
        assert_eq!(lifecycle_column().render(&row), "production");
        assert_eq!(targets_column().render(&row), "./a.yaml, ./b.yaml");
        assert_eq!(owner_column().render(&row), "team-a");
        assert_eq!(namespace_column().render(&row), "default");
        assert_eq!(system_column().render(&row), "");
    }
}
