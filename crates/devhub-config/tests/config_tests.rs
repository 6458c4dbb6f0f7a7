// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Devhub configuration system.

use std::fs;

use devhub_config::diagnostic::ConfigError;
use devhub_config::model::RawRouteMenuItem;
use devhub_config::validation::lint_frontend;
use devhub_config::{load_and_validate_settings_str, load_app_config, KindFilter};
use pretty_assertions::assert_eq;
use serde_json::json;

/// An unknown settings key is reported with a suggestion.
#[test]
fn settings_typo_gets_suggestion() {
    let errors = load_and_validate_settings_str("[logging]\nlevl = \"debug\"\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "levl");
            assert_eq!(suggestion.as_deref(), Some("level"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn settings_wrong_type_is_invalid_type() {
    let errors = load_and_validate_settings_str("[output]\npretty = \"yes\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::InvalidType { key, .. } if key.ends_with("pretty")));
}

#[test]
fn settings_validation_runs_after_extraction() {
    let errors = load_and_validate_settings_str("[logging]\nlevel = \"\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("logging.level")));
}

/// Later files override earlier ones while scopes keep their first position.
#[test]
fn layered_files_merge_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("app-config.yaml");
    let local = dir.path().join("app-config.local.json");
    fs::write(
        &base,
        r#"
dynamicPlugins:
  frontend:
    acme.plugin-a:
      dynamicRoutes:
        - path: /a
          importName: PageA
          menuItem:
            text: A
            icon: a
    acme.plugin-b:
      appIcons:
        - name: bIcon
catalog:
  table:
    columns:
      exclude: [tags]
"#,
    )
    .unwrap();
    fs::write(
        &local,
        json!({
            "dynamicPlugins": {
                "frontend": {
                    "acme.plugin-c": { "mountPoints": [{ "mountPoint": "entity.page.overview/cards" }] },
                    "acme.plugin-a": { "dynamicRoutes": [{ "path": "/a2" }] }
                }
            },
            "catalog": { "table": { "columns": { "custom": [
                { "title": "Tier", "field": "metadata.annotations['custom/tier']", "kind": "API" }
            ] } } }
        })
        .to_string(),
    )
    .unwrap();

    let app = load_app_config(&[&base, &local]).unwrap();
    let frontend = app.dynamic_plugins().frontend.unwrap();
    let scopes: Vec<&str> = frontend.iter().map(|(s, _)| s).collect();
    assert_eq!(scopes, vec!["acme.plugin-a", "acme.plugin-b", "acme.plugin-c"]);

    let a = frontend.get("acme.plugin-a").unwrap();
    assert_eq!(a.dynamic_routes.len(), 1);
    assert_eq!(a.dynamic_routes[0].path, "/a2");
    assert!(a.dynamic_routes[0].menu_item.is_none());

    let columns = app.catalog_columns().unwrap();
    assert_eq!(columns.exclude, Some(vec!["tags".to_string()]));
    let custom = columns.custom.unwrap();
    assert_eq!(custom[0].kind, Some(KindFilter::One("API".into())));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_app_config(&[dir.path().join("absent.yaml")]).unwrap_err();
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn yaml_route_menu_item_decodes() {
    let app = devhub_config::load_app_config_from_str(
        r#"
dynamicPlugins:
  frontend:
    acme.plugin-a:
      dynamicRoutes:
        - path: /admin/plugins
          menuItem:
            text: Plugins
            icon: extension
            parent: admin
            priority: 10
"#,
        devhub_config::DocumentFormat::Yaml,
    )
    .unwrap();
    let frontend = app.dynamic_plugins().frontend.unwrap();
    let route = &frontend.get("acme.plugin-a").unwrap().dynamic_routes[0];
    match &route.menu_item {
        Some(RawRouteMenuItem::Text(text)) => {
            assert_eq!(text.parent.as_deref(), Some("admin"));
            assert_eq!(text.priority, Some(10));
        }
        other => panic!("expected text menu item, got {other:?}"),
    }
}

#[test]
fn lint_reads_merged_frontend() {
    let app = devhub_config::load_app_config_from_str(
        r#"{ "dynamicPlugins": { "frontend": { "acme": { "themes": { "id": "x" } } } } }"#,
        devhub_config::DocumentFormat::Json,
    )
    .unwrap();
    let errors = lint_frontend(app.frontend_value().unwrap());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "invalid type for `dynamicPlugins.frontend.acme.themes`: found object"
    );
}
