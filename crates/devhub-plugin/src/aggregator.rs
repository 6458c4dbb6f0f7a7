// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattens per-plugin configuration into a [`DynamicConfig`].
//!
//! Scopes are visited in declaration order and each category keeps that order.
//! Entries are never deduplicated or merged across scopes.

use devhub_config::{DynamicPluginConfig, FrontendConfig};
use tracing::{debug, warn};

use crate::defaults::{module_or_default, ApplyDefaults};
use crate::menu::extract_menu_items;
use crate::types::{DynamicConfig, PluginModule};

/// Resolve every plugin scope into the runtime registry lists.
///
/// Total: malformed entries were already dropped while decoding, and the only
/// entries dropped here are sign-in pages without an import name.
pub fn resolve(frontend: &FrontendConfig) -> DynamicConfig {
    let mut config = DynamicConfig::default();

    for (scope, props) in frontend.iter() {
        config.plugin_modules.push(PluginModule {
            scope: scope.to_string(),
            module: module_or_default(props.plugin_module.as_deref()),
        });

        extend(&mut config.dynamic_routes, scope, &props.dynamic_routes);
        extend(&mut config.entity_tabs, scope, &props.entity_tabs);
        extend(&mut config.mount_points, scope, &props.mount_points);
        extend(&mut config.app_icons, scope, &props.app_icons);
        extend(&mut config.api_factories, scope, &props.api_factories);
        extend(
            &mut config.analytics_api_extensions,
            scope,
            &props.analytics_api_extensions,
        );
        extend(
            &mut config.scaffolder_field_extensions,
            scope,
            &props.scaffolder_field_extensions,
        );
        extend(&mut config.techdocs_addons, scope, &props.techdocs_addons);
        extend(&mut config.themes, scope, &props.themes);
        extend(
            &mut config.translation_resources,
            scope,
            &props.translation_resources,
        );
        extend(
            &mut config.route_binding_targets,
            scope,
            &props.route_bindings.targets,
        );
        config
            .route_bindings
            .extend(props.route_bindings.bindings.iter().cloned());
        config
            .provider_settings
            .extend(props.provider_settings.iter().cloned());

        if let Some(page) = &props.sign_in_page {
            match page.apply_defaults(scope) {
                Some(entry) => config.sign_in_pages.push(entry),
                None => warn!(scope, "sign-in page has no importName; skipping it"),
            }
        }
    }

    config.menu_items = extract_menu_items(frontend);

    debug!(
        scopes = frontend.len(),
        routes = config.dynamic_routes.len(),
        mount_points = config.mount_points.len(),
        menu_roots = config.menu_items.len(),
        "resolved dynamic plugin config"
    );
    config
}

/// Resolve the `dynamicPlugins` section. No `frontend` means an empty registry.
pub fn resolve_plugins(plugins: &DynamicPluginConfig) -> DynamicConfig {
    plugins.frontend.as_ref().map(resolve).unwrap_or_default()
}

fn extend<T: ApplyDefaults>(out: &mut Vec<T::Output>, scope: &str, entries: &[T]) {
    out.extend(entries.iter().filter_map(|entry| entry.apply_defaults(scope)));
}
