// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Devhub developer portal.
//!
//! Two kinds of configuration live here:
//!
//! - the **app config**, layered YAML/JSON documents whose
//!   `dynamicPlugins.frontend` and `catalog.table.columns` sections feed the
//!   plugin resolver and the catalog column composer;
//! - the **tool settings** (`devhub.toml`) of the `devhub` binary, loaded
//!   through Figment with strict validation and typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use devhub_config::load_app_config;
//!
//! let app = load_app_config(&["app-config.yaml", "app-config.local.yaml"]).unwrap();
//! let plugins = app.dynamic_plugins();
//! println!("{} plugin scopes", plugins.frontend.map(|f| f.len()).unwrap_or(0));
//! ```

pub mod catalog;
pub mod condition;
pub mod diagnostic;
pub mod loader;
pub mod model;
mod parse;
pub mod settings;
pub mod validation;

pub use catalog::{CatalogColumnConfig, CustomColumnConfig, KindFilter};
pub use condition::{Condition, ConditionFn, MountPointConfigRawIf};
pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_app_config, load_app_config_from_str, AppConfig, DocumentFormat};
pub use model::{CustomProperties, DynamicPluginConfig, FrontendConfig};
pub use settings::DevhubSettings;

/// Load tool settings from the XDG hierarchy and validate them.
///
/// On a Figment error the TOML sources are re-read so diagnostics can point
/// at the offending key.
pub fn load_and_validate_settings() -> Result<DevhubSettings, Vec<ConfigError>> {
    match settings::load_settings() {
        Ok(settings) => {
            validation::validate_settings(&settings)?;
            Ok(settings)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load tool settings from a TOML string and validate them.
pub fn load_and_validate_settings_str(toml_content: &str) -> Result<DevhubSettings, Vec<ConfigError>> {
    match settings::load_settings_from_str(toml_content) {
        Ok(settings) => {
            validation::validate_settings(&settings)?;
            Ok(settings)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

fn collect_toml_sources() -> Vec<(String, String)> {
    settings::settings_paths()
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
