// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for plugin configuration resolution.

use devhub_config::FrontendConfig;
use devhub_plugin::{resolve, DEFAULT_IMPORT_NAME, DEFAULT_MODULE};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn scope() -> impl Strategy<Value = String> {
    "[a-z]{1,6}\\.plugin-[a-z]{1,6}"
}

fn route() -> impl Strategy<Value = Value> {
    (
        "/[a-z]{1,8}",
        proptest::option::of("[A-Z][a-zA-Z]{0,8}"),
        proptest::option::of("[A-Z][a-zA-Z]{0,8}"),
    )
        .prop_map(|(path, module, import_name)| {
            let mut route = Map::new();
            route.insert("path".into(), json!(path));
            if let Some(module) = module {
                route.insert("module".into(), json!(module));
            }
            if let Some(import_name) = import_name {
                route.insert("importName".into(), json!(import_name));
            }
            Value::Object(route)
        })
}

/// Distinct scopes, each contributing a list of routes.
fn frontend() -> impl Strategy<Value = Vec<(String, Vec<Value>)>> {
    prop::collection::vec((scope(), prop::collection::vec(route(), 0..4)), 0..6).prop_map(
        |mut scopes| {
            let mut seen = std::collections::HashSet::new();
            scopes.retain(|(scope, _)| seen.insert(scope.clone()));
            scopes
        },
    )
}

fn to_value(scopes: &[(String, Vec<Value>)]) -> Value {
    let mut frontend = Map::new();
    for (scope, routes) in scopes {
        frontend.insert(scope.clone(), json!({ "dynamicRoutes": routes }));
    }
    Value::Object(frontend)
}

proptest! {
    /// Routes come out grouped by scope in declaration order, each scope's
    /// routes in their own order, with defaults filled in.
    #[test]
    fn routes_preserve_declaration_order(scopes in frontend()) {
        let config = resolve(&FrontendConfig::from_value(&to_value(&scopes)));

        let expected: Vec<(String, String)> = scopes
            .iter()
            .flat_map(|(scope, routes)| {
                routes.iter().map(move |r| (scope.clone(), r["path"].as_str().unwrap_or_default().to_string()))
            })
            .collect();
        let actual: Vec<(String, String)> = config
            .dynamic_routes
            .iter()
            .map(|r| (r.scope.clone(), r.path.clone()))
            .collect();
        prop_assert_eq!(actual, expected);

        let raw_routes = scopes.iter().flat_map(|(_, routes)| routes.iter());
        for (route, raw) in config.dynamic_routes.iter().zip(raw_routes) {
            prop_assert_eq!(&route.module, raw["module"].as_str().unwrap_or(DEFAULT_MODULE));
            prop_assert_eq!(&route.import_name, raw["importName"].as_str().unwrap_or(DEFAULT_IMPORT_NAME));
        }
    }

    /// Resolving the same input twice gives the same output.
    #[test]
    fn resolve_is_idempotent(scopes in frontend()) {
        let frontend = FrontendConfig::from_value(&to_value(&scopes));
        prop_assert_eq!(resolve(&frontend), resolve(&frontend));
    }

    /// A fragment contributing only mount points leaves every other category
    /// empty apart from its plugin module entry.
    #[test]
    fn mount_points_do_not_leak(ids in prop::collection::vec("[a-z]{1,8}\\.page/[a-z]{1,8}", 0..5)) {
        let mount_points: Vec<Value> = ids.iter().map(|id| json!({ "mountPoint": id })).collect();
        let config = resolve(&FrontendConfig::from_value(&json!({
            "acme.only-mounts": { "mountPoints": mount_points }
        })));

        prop_assert_eq!(config.mount_points.len(), ids.len());
        prop_assert_eq!(config.plugin_modules.len(), 1);
        prop_assert!(config.api_factories.is_empty());
        prop_assert!(config.analytics_api_extensions.is_empty());
        prop_assert!(config.app_icons.is_empty());
        prop_assert!(config.dynamic_routes.is_empty());
        prop_assert!(config.menu_items.is_empty());
        prop_assert!(config.entity_tabs.is_empty());
        prop_assert!(config.route_bindings.is_empty());
        prop_assert!(config.route_binding_targets.is_empty());
        prop_assert!(config.provider_settings.is_empty());
        prop_assert!(config.scaffolder_field_extensions.is_empty());
        prop_assert!(config.sign_in_pages.is_empty());
        prop_assert!(config.techdocs_addons.is_empty());
        prop_assert!(config.themes.is_empty());
        prop_assert!(config.translation_resources.is_empty());
    }
}
