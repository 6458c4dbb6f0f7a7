// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of tool settings and lint of plugin configuration.
//!
//! Lint never changes how configuration resolves. It reports the problems the
//! resolver silently absorbs so they can be fixed at the source.

use serde_json::Value;

use crate::catalog::{CatalogColumnConfig, COLUMN_IDS, KNOWN_ENTITY_KINDS};
use crate::condition::Condition;
use crate::diagnostic::ConfigError;
use crate::model::FRONTEND_CATEGORIES;
use crate::parse::value_kind;
use crate::settings::DevhubSettings;

const MAP_CATEGORIES: &[&str] = &["menuItems", "routeBindings", "signInPage"];
const PREDICATE_LISTS: &[&str] = &["allOf", "anyOf", "oneOf"];

/// Validate deserialized settings. Collects every error instead of failing fast.
pub fn validate_settings(settings: &DevhubSettings) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if settings.logging.level.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "logging.level must not be empty".to_string(),
        });
    }

    for (index, path) in settings.sources.app_config.iter().enumerate() {
        if path.as_os_str().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("sources.app_config[{index}] must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lint a raw `dynamicPlugins.frontend` value.
pub fn lint_frontend(frontend: &Value) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let Some(scopes) = frontend.as_object() else {
        if !frontend.is_null() {
            errors.push(invalid_type("dynamicPlugins.frontend", frontend, "a map of plugin scopes"));
        }
        return errors;
    };

    for (scope, props) in scopes {
        let section = format!("dynamicPlugins.frontend.{scope}");
        let Some(props) = props.as_object() else {
            if !props.is_null() {
                errors.push(invalid_type(&section, props, "a map of extension points"));
            }
            continue;
        };

        for (key, value) in props {
            let key_path = format!("{section}.{key}");
            if !FRONTEND_CATEGORIES.contains(&key.as_str()) {
                errors.push(ConfigError::unknown_key(&section, key, FRONTEND_CATEGORIES));
                continue;
            }
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "pluginModule" if !value.is_string() => {
                    errors.push(invalid_type(&key_path, value, "a string"));
                }
                "pluginModule" => {}
                category if MAP_CATEGORIES.contains(&category) => {
                    if !value.is_object() {
                        errors.push(invalid_type(&key_path, value, "a map"));
                    } else if category == "signInPage"
                        && value.get("importName").and_then(Value::as_str).is_none_or(str::is_empty)
                    {
                        errors.push(ConfigError::Validation {
                            message: format!(
                                "{key_path} has no importName; the sign-in page will be ignored"
                            ),
                        });
                    }
                }
                "mountPoints" => match value.as_array() {
                    Some(mount_points) => lint_mount_points(&key_path, mount_points, &mut errors),
                    None => errors.push(invalid_type(&key_path, value, "a list")),
                },
                _ if !value.is_array() => {
                    errors.push(invalid_type(&key_path, value, "a list"));
                }
                _ => {}
            }
        }
    }

    errors
}

fn lint_mount_points(section: &str, mount_points: &[Value], errors: &mut Vec<ConfigError>) {
    for (index, mount_point) in mount_points.iter().enumerate() {
        let Some(conditional) = mount_point.get("config").and_then(|c| c.get("if")) else {
            continue;
        };
        for list in PREDICATE_LISTS {
            let Some(atoms) = conditional.get(*list).and_then(Value::as_array) else {
                continue;
            };
            for (position, atom) in atoms.iter().enumerate() {
                if Condition::from_value(atom).is_unknown() {
                    errors.push(ConfigError::Validation {
                        message: format!(
                            "{section}[{index}].config.if.{list}[{position}] matches no known condition \
                             (isKind, isType, hasAnnotation) and will always be false"
                        ),
                    });
                }
            }
        }
    }
}

/// Lint `catalog.table.columns`: unknown column ids and custom column kinds
/// that name no catalog kind.
pub fn lint_catalog_columns(config: &CatalogColumnConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let section = "catalog.table.columns";

    for (list, ids) in [("include", &config.include), ("exclude", &config.exclude)] {
        for id in ids.iter().flatten() {
            if !COLUMN_IDS.contains(&id.as_str()) {
                errors.push(ConfigError::unknown_key(format!("{section}.{list}"), id, COLUMN_IDS));
            }
        }
    }

    for (index, column) in config.custom.iter().flatten().enumerate() {
        let Some(filter) = &column.kind else { continue };
        for kind in filter.kinds() {
            let lowered = kind.to_ascii_lowercase();
            if !KNOWN_ENTITY_KINDS.contains(&lowered.as_str()) {
                errors.push(ConfigError::unknown_key(
                    format!("{section}.custom[{index}].kind"),
                    kind,
                    KNOWN_ENTITY_KINDS,
                ));
            }
        }
    }

    errors
}

fn invalid_type(key: &str, found: &Value, expected: &str) -> ConfigError {
    ConfigError::InvalidType {
        key: key.to_string(),
        detail: format!("found {}", value_kind(found)),
        expected: expected.to_string(),
        span: None,
        src: None,
    }
}
