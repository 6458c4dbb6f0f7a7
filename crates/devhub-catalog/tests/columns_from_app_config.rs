// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog columns driven by a loaded app-config.

use std::cmp::Ordering;

use devhub_catalog::{create_catalog_columns_func, CatalogTableRow, ViewContext};
use devhub_test_utils::{EntityBuilder, TempAppConfig};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const APP_CONFIG: &str = r#"
catalog:
  table:
    columns:
      exclude: [lifecycle]
      custom:
        - title: Security Tier
          field: "metadata.annotations['custom/security-tier']"
          defaultValue: unknown
          width: 120
        - title: API Version
          field: spec.definition.version
          kind: API
          sortable: false
"#;

#[test]
fn columns_follow_the_catalog_block() {
    let app = TempAppConfig::new()
        .unwrap()
        .with_file("app-config.yaml", APP_CONFIG)
        .unwrap()
        .load()
        .unwrap();
    let func = create_catalog_columns_func(app.catalog_columns());

    let component = func(&ViewContext::new().with_kind("Component"));
    let titles: Vec<&str> = component.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Name", "System", "Owner", "Type", "Description", "Tags", "Created At", "Security Tier"]
    );

    let api = func(&ViewContext::new().with_kind("API"));
    let version = api.iter().find(|c| c.title == "API Version").unwrap();
    assert!(!version.is_sortable());

    let tier = component.last().unwrap();
    assert_eq!(tier.width.as_deref(), Some("120px"));
    let gold = CatalogTableRow::from_entity(
        EntityBuilder::new("Component", "checkout")
            .annotation("custom/security-tier", "gold")
            .build(),
    );
    let bare = CatalogTableRow::from_entity(EntityBuilder::new("Component", "storefront").build());
    assert_eq!(tier.render(&gold), "gold");
    assert_eq!(tier.render(&bare), "unknown");
}

#[test]
fn missing_catalog_block_uses_defaults() {
    let app = TempAppConfig::new()
        .unwrap()
        .with_file("app-config.yaml", "app:\n  title: Devhub\n")
        .unwrap()
        .load()
        .unwrap();
    assert!(app.catalog_columns().is_none());
    let columns = create_catalog_columns_func(None)(&ViewContext::new());
    assert_eq!(columns.last().map(|c| c.title.as_str()), Some("Created At"));
}

proptest! {
    /// Sorting by Created At orders rows by instant, with rows lacking a
    /// valid timestamp first.
    #[test]
    fn created_at_sorts_chronologically(days in prop::collection::vec(proptest::option::of(1u32..28), 0..8)) {
        let column = devhub_catalog::created_at_column();
        let mut rows: Vec<CatalogTableRow> = days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let builder = EntityBuilder::new("Component", &format!("e{i}"));
                let builder = match day {
                    Some(day) => builder.annotation("backstage.io/createdAt", &format!("2024-03-{day:02}T12:00:00Z")),
                    None => builder.annotation("backstage.io/createdAt", "not-a-date"),
                };
                CatalogTableRow::from_entity(builder.build())
            })
            .collect();
        rows.sort_by(|a, b| column.custom_sort(a, b).unwrap_or(Ordering::Equal));

        let rendered: Vec<String> = rows.iter().map(|r| column.render(r)).collect();
        let mut expected = rendered.clone();
        expected.sort();
        prop_assert_eq!(rendered, expected);
    }
}
