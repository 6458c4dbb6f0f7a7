// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composes catalog table columns from `catalog.table.columns`.
//!
//! Without configuration the view gets the platform defaults plus a
//! "Created At" column. A non-empty `include` picks built-in columns by id in
//! the given order, otherwise `exclude` removes ids from the defaults. Custom
//! columns matching the view's kind filter are appended last.

use std::sync::Arc;

use devhub_config::catalog::KNOWN_ENTITY_KINDS;
use devhub_config::{CatalogColumnConfig, CustomColumnConfig};
use tracing::{debug, warn};

use crate::builtin::{builtin_column, default_columns};
use crate::column::Column;
use crate::created_at::{created_at_column, CREATED_AT_ID};
use crate::view::ViewContext;

/// Column resolver registered with the catalog table.
pub type CatalogColumnsFunc = Arc<dyn Fn(&ViewContext) -> Vec<Column> + Send + Sync>;

/// Resolves columns for a view from a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ColumnComposer {
    config: Option<CatalogColumnConfig>,
}

impl ColumnComposer {
    pub fn new(config: Option<CatalogColumnConfig>) -> Self {
        if let Some(custom) = config.as_ref().and_then(|c| c.custom.as_ref()) {
            for column in custom {
                warn_unknown_kinds(column);
            }
        }
        Self { config }
    }

    pub fn columns(&self, view: &ViewContext) -> Vec<Column> {
        let Some(config) = self.config.as_ref().filter(|c| !c.is_unset()) else {
            return defaults_with_created_at(view);
        };

        let mut columns: Vec<Column> = match config.include.as_deref() {
            Some(include) if !include.is_empty() => include.iter().filter_map(|id| included_column(id)).collect(),
            _ => {
                let exclude = config.exclude.as_deref().unwrap_or_default();
                defaults_with_created_at(view)
                    .into_iter()
                    .filter(|column| column.id.as_ref().is_none_or(|id| !exclude.contains(id)))
                    .collect()
            }
        };

        let current_kind = view.kind.as_deref();
        columns.extend(
            config
                .custom
                .iter()
                .flatten()
                .filter(|custom| should_apply_custom_column(custom, current_kind))
                .map(create_custom_column),
        );
        columns
    }
}

/// Bind a configuration into a column resolver for catalog views.
pub fn create_catalog_columns_func(config: Option<CatalogColumnConfig>) -> CatalogColumnsFunc {
    let composer = ColumnComposer::new(config);
    Arc::new(move |view: &ViewContext| composer.columns(view))
}

/// Build a column for a user-declared entity field.
pub fn create_custom_column(config: &CustomColumnConfig) -> Column {
    let path = config.field.clone();
    let default_value = config.default_value.clone().unwrap_or_default();
    let mut column = Column::new(config.title.clone(), format!("entity.{}", config.field), move |row| {
        row.entity
            .lookup_text(&path)
            .unwrap_or_else(|| default_value.clone())
    });

    if let Some(width) = config.width.filter(|w| *w > 0) {
        column = column.with_width(format!("{width}px"));
    }

    if config.is_sortable() {
        let path = config.field.clone();
        column.with_custom_sort(move |a, b| {
            let a = a.entity.lookup_text(&path).unwrap_or_default();
            let b = b.entity.lookup_text(&path).unwrap_or_default();
            a.cmp(&b)
        })
    } else {
        column.sorting = Some(false);
        column
    }
}

/// A column without a kind filter applies everywhere, as does any column in
/// a view without a kind filter. An empty view kind counts as no filter.
pub fn should_apply_custom_column(config: &CustomColumnConfig, current_kind: Option<&str>) -> bool {
    match (&config.kind, current_kind.filter(|kind| !kind.is_empty())) {
        (Some(filter), Some(kind)) => filter.matches(kind),
        _ => true,
    }
}

fn defaults_with_created_at(view: &ViewContext) -> Vec<Column> {
    let mut columns = default_columns(view);
    columns.push(created_at_column());
    columns
}

fn included_column(id: &str) -> Option<Column> {
    if id == CREATED_AT_ID {
        return Some(created_at_column());
    }
    let column = builtin_column(id);
    if column.is_none() {
        debug!(id, "unknown catalog column id in include; skipping it");
    }
    column
}

fn warn_unknown_kinds(column: &CustomColumnConfig) {
    let Some(filter) = &column.kind else {
        return;
    };
    for kind in filter.kinds() {
        if !KNOWN_ENTITY_KINDS.contains(&kind.to_ascii_lowercase().as_str()) {
            warn!(column = column.title.as_str(), kind, "custom column names an unknown entity kind");
        }
    }
}
