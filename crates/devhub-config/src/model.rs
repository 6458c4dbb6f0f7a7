// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw plugin configuration model.
//!
//! `dynamicPlugins.frontend` maps each plugin scope to the extension points it
//! contributes. Every category is optional, and scope declaration order is
//! preserved because it becomes the precedence order of the resolved lists.
//!
//! Entries are typed per category but decoded leniently: an entry that does
//! not fit its schema is dropped on its own, and a category holding something
//! other than a list is treated as empty.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::condition::MountPointConfigRawIf;
use crate::parse;

/// Category keys a plugin fragment may declare.
pub const FRONTEND_CATEGORIES: &[&str] = &[
    "pluginModule",
    "dynamicRoutes",
    "menuItems",
    "routeBindings",
    "entityTabs",
    "mountPoints",
    "appIcons",
    "apiFactories",
    "analyticsApiExtensions",
    "providerSettings",
    "scaffolderFieldExtensions",
    "signInPage",
    "techdocsAddons",
    "themes",
    "translationResources",
];

/// The `dynamicPlugins` section of the app config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DynamicPluginConfig {
    #[serde(default)]
    pub frontend: Option<FrontendConfig>,
}

/// Plugin scope → contributed extension points, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontendConfig {
    scopes: IndexMap<String, CustomProperties>,
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from a raw `frontend` value. Anything but an object is empty.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            if !value.is_null() {
                warn!(found = parse::value_kind(value), "dynamicPlugins.frontend is not a map; ignoring it");
            }
            return Self::default();
        };
        obj.iter()
            .map(|(scope, props)| (scope.clone(), CustomProperties::from_value(scope, props)))
            .collect()
    }

    /// Add or replace a scope. A replaced scope keeps its original position.
    pub fn insert(&mut self, scope: impl Into<String>, properties: CustomProperties) {
        self.scopes.insert(scope.into(), properties);
    }

    /// Builder form of [`FrontendConfig::insert`].
    pub fn with_scope(mut self, scope: impl Into<String>, properties: CustomProperties) -> Self {
        self.insert(scope, properties);
        self
    }

    pub fn get(&self, scope: &str) -> Option<&CustomProperties> {
        self.scopes.get(scope)
    }

    /// Scopes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomProperties)> {
        self.scopes.iter().map(|(scope, props)| (scope.as_str(), props))
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl FromIterator<(String, CustomProperties)> for FrontendConfig {
    fn from_iter<I: IntoIterator<Item = (String, CustomProperties)>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for FrontendConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Everything one plugin scope contributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomProperties {
    pub plugin_module: Option<String>,
    pub dynamic_routes: Vec<RawDynamicRoute>,
    pub menu_items: IndexMap<String, MenuItemConfig>,
    pub route_bindings: RawRouteBindings,
    pub entity_tabs: Vec<RawEntityTab>,
    pub mount_points: Vec<RawMountPoint>,
    pub app_icons: Vec<RawAppIcon>,
    pub api_factories: Vec<RawModuleImport>,
    pub analytics_api_extensions: Vec<RawModuleImport>,
    pub provider_settings: Vec<ProviderSetting>,
    pub scaffolder_field_extensions: Vec<RawModuleImport>,
    pub sign_in_page: Option<RawSignInPage>,
    pub techdocs_addons: Vec<RawTechdocsAddon>,
    pub themes: Vec<RawTheme>,
    pub translation_resources: Vec<RawTranslationResource>,
}

impl CustomProperties {
    /// Decode one scope's fragment. Never fails; see the module docs.
    pub fn from_value(scope: &str, value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            if !value.is_null() {
                warn!(scope, found = parse::value_kind(value), "plugin config is not a map; ignoring it");
            }
            return Self::default();
        };

        for key in obj.keys() {
            if !FRONTEND_CATEGORIES.contains(&key.as_str()) {
                debug!(scope, key = key.as_str(), "ignoring unknown plugin config key");
            }
        }

        Self {
            plugin_module: obj.get("pluginModule").and_then(Value::as_str).map(str::to_string),
            dynamic_routes: parse::list(scope, "dynamicRoutes", obj.get("dynamicRoutes")),
            menu_items: menu_items(scope, obj.get("menuItems")),
            route_bindings: RawRouteBindings::from_value(scope, obj.get("routeBindings")),
            entity_tabs: parse::list(scope, "entityTabs", obj.get("entityTabs")),
            mount_points: parse::list(scope, "mountPoints", obj.get("mountPoints")),
            app_icons: parse::list(scope, "appIcons", obj.get("appIcons")),
            api_factories: parse::list(scope, "apiFactories", obj.get("apiFactories")),
            analytics_api_extensions: parse::list(
                scope,
                "analyticsApiExtensions",
                obj.get("analyticsApiExtensions"),
            ),
            provider_settings: parse::list(scope, "providerSettings", obj.get("providerSettings")),
            scaffolder_field_extensions: parse::list(
                scope,
                "scaffolderFieldExtensions",
                obj.get("scaffolderFieldExtensions"),
            ),
            sign_in_page: obj
                .get("signInPage")
                .filter(|v| !v.is_null())
                .and_then(|v| parse::entry(scope, "signInPage", None, v)),
            techdocs_addons: parse::list(scope, "techdocsAddons", obj.get("techdocsAddons")),
            themes: parse::list(scope, "themes", obj.get("themes")),
            translation_resources: parse::list(
                scope,
                "translationResources",
                obj.get("translationResources"),
            ),
        }
    }
}

fn menu_items(scope: &str, value: Option<&Value>) -> IndexMap<String, MenuItemConfig> {
    match value {
        None | Some(Value::Null) => IndexMap::new(),
        Some(Value::Object(entries)) => entries
            .iter()
            .filter_map(|(name, item)| {
                parse::entry(scope, "menuItems", None, item).map(|config| (name.clone(), config))
            })
            .collect(),
        Some(other) => {
            warn!(scope, found = parse::value_kind(other), "menuItems is not a map; ignoring it");
            IndexMap::new()
        }
    }
}

/// `{ module?, importName? }`, the shape shared by API factories, analytics
/// API extensions and scaffolder field extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModuleImport {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
}

/// `{ props? }` attached to routes, menu components and techdocs addons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDynamicRoute {
    pub path: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
    #[serde(default, deserialize_with = "parse::lenient_option")]
    pub menu_item: Option<RawRouteMenuItem>,
    #[serde(default, deserialize_with = "parse::lenient_option")]
    pub config: Option<ComponentConfig>,
}

/// The `menuItem` of a dynamic route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRouteMenuItem {
    /// Contributes a node to the sidebar menu tree.
    Text(RouteMenuText),
    /// Renders a plugin-provided sidebar component instead.
    Component(RawRouteMenuComponent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteMenuText {
    pub text: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRouteMenuComponent {
    #[serde(default)]
    pub module: Option<String>,
    pub import_name: String,
    #[serde(default)]
    pub config: Option<ComponentConfig>,
}

/// An explicit `menuItems.<name>` override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub parent: Option<String>,
}

/// `routeBindings`: binding targets to default, bindings to pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRouteBindings {
    pub targets: Vec<RawBindingTarget>,
    pub bindings: Vec<RouteBinding>,
}

impl RawRouteBindings {
    fn from_value(scope: &str, value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::default(),
            Some(Value::Object(obj)) => Self {
                targets: parse::list(scope, "routeBindings.targets", obj.get("targets")),
                bindings: parse::list(scope, "routeBindings.bindings", obj.get("bindings")),
            },
            Some(other) => {
                warn!(scope, found = parse::value_kind(other), "routeBindings is not a map; ignoring it");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBindingTarget {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A complete route binding, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteBinding {
    pub bind_target: String,
    #[serde(default)]
    pub bind_map: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntityTab {
    pub mount_point: String,
    pub path: String,
    pub title: String,
    #[serde(default, alias = "pariority")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMountPoint {
    pub mount_point: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
    #[serde(default)]
    pub config: Option<MountPointConfigRaw>,
}

/// Mount-point configuration. Keys besides `layout`, `props` and `if` are
/// kept in `extra` and passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MountPointConfigRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Map<String, Value>>,
    #[serde(rename = "if", default, skip_serializing_if = "Option::is_none")]
    pub if_: Option<MountPointConfigRawIf>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAppIcon {
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignInPage {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTechdocsAddon {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
    #[serde(default, deserialize_with = "parse::lenient_option")]
    pub config: Option<ComponentConfig>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeVariant {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTheme {
    pub id: String,
    pub title: String,
    pub variant: ThemeVariant,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
}

/// Sign-in provider description, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSetting {
    pub title: String,
    pub description: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonTranslation {
    pub locale: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTranslationResource {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub import_name: Option<String>,
    #[serde(rename = "ref", default)]
    pub translation_ref: Option<String>,
    #[serde(default)]
    pub json_translations: Option<Vec<JsonTranslation>>,
}
