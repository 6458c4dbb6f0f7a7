// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered app-config loading.
//!
//! App-config files are YAML or JSON documents merged in the order given:
//! objects merge key by key, everything else in a later file replaces the
//! earlier value. Key order is kept so plugin scopes stay in declaration order.

use std::path::Path;

use devhub_core::path::lookup;
use devhub_core::DevhubError;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::catalog::CatalogColumnConfig;
use crate::model::{DynamicPluginConfig, FrontendConfig};

/// Path of the catalog column configuration inside the app config.
pub const CATALOG_COLUMNS_PATH: &str = "catalog.table.columns";

/// Document syntax of an app-config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// A merged app-config document.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    root: Value,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }
}

impl AppConfig {
    pub fn from_value(root: Value) -> Self {
        match root {
            Value::Null => Self::default(),
            root => Self { root },
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Merge another document over this one.
    pub fn merge(&mut self, overlay: Value) {
        merge_values(&mut self.root, overlay);
    }

    /// The raw `dynamicPlugins.frontend` value, if present.
    pub fn frontend_value(&self) -> Option<&Value> {
        lookup(&self.root, "dynamicPlugins.frontend")
    }

    /// The `dynamicPlugins` section. Missing sections yield an empty config.
    pub fn dynamic_plugins(&self) -> DynamicPluginConfig {
        DynamicPluginConfig {
            frontend: self.frontend_value().map(FrontendConfig::from_value),
        }
    }

    /// The `catalog.table.columns` section, if declared.
    pub fn catalog_columns(&self) -> Option<CatalogColumnConfig> {
        lookup(&self.root, CATALOG_COLUMNS_PATH).and_then(CatalogColumnConfig::from_value)
    }
}

/// Merge `overlay` into `base`. Objects merge recursively; any other overlay
/// value replaces the base value.
pub fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Parse one document. Blank content is `null`.
pub fn parse_document(origin: &str, content: &str, format: DocumentFormat) -> Result<Value, DevhubError> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    let parsed = match format {
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| DevhubError::Parse {
        origin: origin.to_string(),
        message,
    })
}

/// Load and merge app-config files in order.
pub fn load_app_config<P: AsRef<Path>>(paths: &[P]) -> Result<AppConfig, DevhubError> {
    let mut config = AppConfig::default();
    for path in paths {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DevhubError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = parse_document(&path.display().to_string(), &content, DocumentFormat::from_path(path))?;
        debug!(path = %path.display(), "merging app-config source");
        if !document.is_null() {
            config.merge(document);
        }
    }
    info!(sources = paths.len(), "app-config loaded");
    Ok(config)
}

/// Parse a single in-memory document as an app config.
pub fn load_app_config_from_str(content: &str, format: DocumentFormat) -> Result<AppConfig, DevhubError> {
    parse_document("<inline>", content, format).map(AppConfig::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_is_deep_for_objects_and_replaces_the_rest() {
        let mut base = json!({
            "app": { "title": "Portal", "baseUrl": "http://localhost" },
            "list": [1, 2]
        });
        merge_values(
            &mut base,
            json!({ "app": { "title": "Devhub" }, "list": [3], "extra": true }),
        );
        assert_eq!(
            base,
            json!({
                "app": { "title": "Devhub", "baseUrl": "http://localhost" },
                "list": [3],
                "extra": true
            })
        );
    }

    #[test]
    fn merge_keeps_base_key_order_and_appends_new_keys() {
        let mut base = json!({ "b": 1, "a": 2 });
        merge_values(&mut base, json!({ "c": 3, "b": 4 }));
        let keys: Vec<&String> = base.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn yaml_preserves_scope_order() {
        let yaml = r#"
dynamicPlugins:
  frontend:
    zeta.plugin: {}
    alpha.plugin: {}
"#;
        let config = load_app_config_from_str(yaml, DocumentFormat::Yaml).unwrap();
        let frontend = config.dynamic_plugins().frontend.unwrap();
        let scopes: Vec<&str> = frontend.iter().map(|(s, _)| s).collect();
        assert_eq!(scopes, vec!["zeta.plugin", "alpha.plugin"]);
    }

    #[test]
    fn missing_sections_are_empty() {
        let config = load_app_config_from_str("app:\n  title: x\n", DocumentFormat::Yaml).unwrap();
        assert!(config.dynamic_plugins().frontend.is_none());
        assert!(config.catalog_columns().is_none());
    }

    #[test]
    fn empty_document_is_empty_config() {
        let config = load_app_config_from_str("", DocumentFormat::Yaml).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("a")), DocumentFormat::Yaml);
    }

    #[test]
    fn parse_errors_name_their_origin() {
        let err = load_app_config_from_str("{ not json", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse <inline>"));
    }
}
