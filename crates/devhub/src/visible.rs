// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `devhub visible` command implementation.
//!
//! Evaluates every mount point registered under an id against one entity
//! and prints those that would render.

use std::path::Path;

use devhub_config::loader::parse_document;
use devhub_config::{AppConfig, DocumentFormat};
use devhub_core::{DevhubError, Entity};
use devhub_plugin::{resolve_plugins, DynamicRootConfig};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::output::to_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisibleMountPoint<'a> {
    scope: &'a str,
    module: &'a str,
    import_name: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    layout: &'a Map<String, Value>,
    #[serde(skip_serializing_if = "is_empty")]
    props: &'a Map<String, Value>,
}

fn is_empty(map: &&Map<String, Value>) -> bool {
    map.is_empty()
}

/// Read an entity document from a YAML or JSON file.
pub fn read_entity(path: &Path) -> Result<Entity, DevhubError> {
    let content = std::fs::read_to_string(path).map_err(|source| DevhubError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&path.display().to_string(), &content, DocumentFormat::from_path(path))?;
    if !document.is_object() {
        return Err(DevhubError::Config(format!(
            "{} does not contain an entity document",
            path.display()
        )));
    }
    Ok(Entity::new(document))
}

pub fn run_visible(
    app: &AppConfig,
    mount_point: &str,
    entity: &Entity,
    pretty: bool,
) -> Result<String, DevhubError> {
    let root = DynamicRootConfig::from_dynamic_config(&resolve_plugins(&app.dynamic_plugins()));
    let registered = root.mount_points(mount_point).len();
    let visible: Vec<VisibleMountPoint<'_>> = root
        .visible_mount_points(mount_point, entity, None)
        .into_iter()
        .map(|m| VisibleMountPoint {
            scope: &m.scope,
            module: &m.module,
            import_name: &m.import_name,
            layout: &m.config.layout,
            props: &m.config.props,
        })
        .collect();
    debug!(mount_point, registered, visible = visible.len(), "evaluated mount point predicates");
    to_json(&visible, pretty)
}
