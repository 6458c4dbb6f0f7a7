// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved registry types.
//!
//! Every entry carries the `scope` of the plugin that contributed it and has
//! its module and import name filled in. Serialized field names are camelCase
//! to match what the rendering shell consumes.

use devhub_config::model::{
    ComponentConfig, JsonTranslation, MountPointConfigRaw, ProviderSetting, RouteBinding,
    RouteMenuText, ThemeVariant,
};
use serde::Serialize;

/// `{ scope, module }` for each plugin scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginModule {
    pub scope: String,
    pub module: String,
}

/// `{ scope, module, importName }`, shared by API factories, analytics API
/// extensions, scaffolder field extensions and sign-in pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEntry {
    pub scope: String,
    pub module: String,
    pub import_name: String,
}

pub type ApiFactory = ModuleEntry;
pub type AnalyticsApiExtension = ModuleEntry;
pub type ScaffolderFieldExtension = ModuleEntry;
pub type SignInPageEntry = ModuleEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicRoute {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<DynamicRouteMenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DynamicRouteMenuItem {
    Text(RouteMenuText),
    Component(MenuItemComponent),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemComponent {
    pub module: String,
    pub import_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

/// A node of the sidebar menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub title: String,
    pub icon: String,
    pub children: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl MenuItem {
    /// Depth-first search for a node by name.
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTabEntry {
    pub scope: String,
    pub mount_point: String,
    pub path: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub mount_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<MountPointConfigRaw>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIcon {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingTarget {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechdocsAddon {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ComponentConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEntry {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub id: String,
    pub title: String,
    pub variant: ThemeVariant,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResource {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    /// Serialized as `ref`; `null` when the plugin names none.
    #[serde(rename = "ref")]
    pub translation_ref: Option<String>,
    pub json_translations: Vec<JsonTranslation>,
}

/// Everything the enabled plugins contribute, flattened per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicConfig {
    pub plugin_modules: Vec<PluginModule>,
    pub api_factories: Vec<ApiFactory>,
    pub analytics_api_extensions: Vec<AnalyticsApiExtension>,
    pub app_icons: Vec<AppIcon>,
    pub dynamic_routes: Vec<DynamicRoute>,
    pub menu_items: Vec<MenuItem>,
    pub entity_tabs: Vec<EntityTabEntry>,
    pub mount_points: Vec<MountPoint>,
    pub route_bindings: Vec<RouteBinding>,
    pub route_binding_targets: Vec<BindingTarget>,
    pub provider_settings: Vec<ProviderSetting>,
    pub scaffolder_field_extensions: Vec<ScaffolderFieldExtension>,
    pub sign_in_pages: Vec<SignInPageEntry>,
    pub techdocs_addons: Vec<TechdocsAddon>,
    pub themes: Vec<ThemeEntry>,
    pub translation_resources: Vec<TranslationResource>,
}
