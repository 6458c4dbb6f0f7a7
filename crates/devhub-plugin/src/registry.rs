// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic root registry.
//!
//! `DynamicRootConfig` is what the rendering shell consumes: mount points
//! grouped by id with their visibility predicates compiled once, entity tab
//! overrides keyed by path, and the pass-through lists the shell mounts as-is.

use devhub_config::model::ProviderSetting;
use devhub_core::{ApiContext, Entity};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::predicate::{compile, Predicate};
use crate::types::{DynamicConfig, MenuItem, ScaffolderFieldExtension, TechdocsAddon};

/// Mount-point configuration with its `if` block compiled.
#[derive(Debug, Clone, Default)]
pub struct MountPointConfig {
    pub layout: Map<String, Value>,
    pub props: Map<String, Value>,
    /// Keys other than `layout`, `props` and `if`.
    pub extra: Map<String, Value>,
    pub predicate: Predicate,
}

/// A mount point ready to render.
#[derive(Debug, Clone)]
pub struct ResolvedMountPoint {
    pub scope: String,
    pub module: String,
    pub import_name: String,
    pub config: MountPointConfig,
}

impl ResolvedMountPoint {
    pub fn is_visible(&self, entity: &Entity, context: Option<&ApiContext>) -> bool {
        self.config.predicate.evaluate(entity, context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTabOverride {
    pub title: String,
    pub mount_point: String,
    pub priority: Option<i64>,
}

/// Registry consumed by the rendering shell.
#[derive(Debug, Clone, Default)]
pub struct DynamicRootConfig {
    mount_points: IndexMap<String, Vec<ResolvedMountPoint>>,
    entity_tab_overrides: IndexMap<String, EntityTabOverride>,
    pub menu_items: Vec<MenuItem>,
    pub scaffolder_field_extensions: Vec<ScaffolderFieldExtension>,
    pub techdocs_addons: Vec<TechdocsAddon>,
    pub provider_settings: Vec<ProviderSetting>,
}

impl DynamicRootConfig {
    pub fn from_dynamic_config(config: &DynamicConfig) -> Self {
        let mut mount_points: IndexMap<String, Vec<ResolvedMountPoint>> = IndexMap::new();
        for mount_point in &config.mount_points {
            let raw = mount_point.config.as_ref();
            let resolved = ResolvedMountPoint {
                scope: mount_point.scope.clone(),
                module: mount_point.module.clone(),
                import_name: mount_point.import_name.clone(),
                config: MountPointConfig {
                    layout: raw.and_then(|c| c.layout.clone()).unwrap_or_default(),
                    props: raw.and_then(|c| c.props.clone()).unwrap_or_default(),
                    extra: raw.map(|c| c.extra.clone()).unwrap_or_default(),
                    predicate: compile(raw.and_then(|c| c.if_.as_ref())),
                },
            };
            mount_points
                .entry(mount_point.mount_point.clone())
                .or_default()
                .push(resolved);
        }

        let mut entity_tab_overrides = IndexMap::new();
        for tab in &config.entity_tabs {
            let previous = entity_tab_overrides.insert(
                tab.path.clone(),
                EntityTabOverride {
                    title: tab.title.clone(),
                    mount_point: tab.mount_point.clone(),
                    priority: tab.priority,
                },
            );
            if previous.is_some() {
                debug!(path = tab.path.as_str(), scope = tab.scope.as_str(), "entity tab override replaced");
            }
        }

        Self {
            mount_points,
            entity_tab_overrides,
            menu_items: config.menu_items.clone(),
            scaffolder_field_extensions: config.scaffolder_field_extensions.clone(),
            techdocs_addons: config.techdocs_addons.clone(),
            provider_settings: config.provider_settings.clone(),
        }
    }

    /// Every mount point registered under `id`, in aggregation order.
    pub fn mount_points(&self, id: &str) -> &[ResolvedMountPoint] {
        self.mount_points.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Mount-point ids in first-registration order.
    pub fn mount_point_ids(&self) -> impl Iterator<Item = &str> {
        self.mount_points.keys().map(String::as_str)
    }

    /// The mount points under `id` whose predicate accepts `entity`.
    pub fn visible_mount_points(
        &self,
        id: &str,
        entity: &Entity,
        context: Option<&ApiContext>,
    ) -> Vec<&ResolvedMountPoint> {
        self.mount_points(id)
            .iter()
            .filter(|mount_point| mount_point.is_visible(entity, context))
            .collect()
    }

    pub fn entity_tab_override(&self, path: &str) -> Option<&EntityTabOverride> {
        self.entity_tab_overrides.get(path)
    }

    pub fn entity_tab_overrides(&self) -> impl Iterator<Item = (&str, &EntityTabOverride)> {
        self.entity_tab_overrides
            .iter()
            .map(|(path, tab)| (path.as_str(), tab))
    }
}

impl From<&DynamicConfig> for DynamicRootConfig {
    fn from(config: &DynamicConfig) -> Self {
        Self::from_dynamic_config(config)
    }
}
