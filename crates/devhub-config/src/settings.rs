// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings for the `devhub` tool itself (`devhub.toml`).
//!
//! Supports XDG hierarchy: `./devhub.toml` > `~/.config/devhub/devhub.toml` >
//! `/etc/devhub/devhub.toml`, with environment variable overrides via the
//! `DEVHUB_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Top-level tool settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevhubSettings {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Default tracing filter. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSettings {
    /// App-config files merged in order when no `--config` is given.
    #[serde(default = "default_app_config")]
    pub app_config: Vec<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            app_config: default_app_config(),
        }
    }
}

fn default_app_config() -> Vec<PathBuf> {
    vec![PathBuf::from("app-config.yaml")]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}

/// Load settings from the XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/devhub/devhub.toml`
/// 3. `~/.config/devhub/devhub.toml`
/// 4. `./devhub.toml`
/// 5. `DEVHUB_*` environment variables
pub fn load_settings() -> Result<DevhubSettings, figment::Error> {
    build_figment().extract()
}

/// Load settings from a TOML string only. No files, no environment.
pub fn load_settings_from_str(toml_content: &str) -> Result<DevhubSettings, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DevhubSettings::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// The settings figment before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(DevhubSettings::default()))
        .merge(Toml::file("/etc/devhub/devhub.toml"));
    if let Some(user) = user_settings_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file("devhub.toml")).merge(env_provider())
}

/// `~/.config/devhub/devhub.toml`, if a config directory exists.
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("devhub/devhub.toml"))
}

/// Paths of every settings file in the hierarchy, lowest precedence first.
pub fn settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/devhub/devhub.toml")];
    paths.extend(user_settings_path());
    paths.push(
        std::env::current_dir()
            .map(|d| d.join("devhub.toml"))
            .unwrap_or_else(|_| PathBuf::from("devhub.toml")),
    );
    paths
}

/// Map `DEVHUB_<SECTION>_<KEY>` onto `section.key`. Variable names are
/// matched case-insensitively.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys contain
/// underscores: `DEVHUB_SOURCES_APP_CONFIG` is `sources.app_config`.
fn env_provider() -> Env {
    Env::prefixed("DEVHUB_").map(|key| {
        key.as_str()
            .to_ascii_lowercase()
            .replacen("logging_", "logging.", 1)
            .replacen("sources_", "sources.", 1)
            .replacen("output_", "output.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_file() {
        let settings = load_settings_from_str("").unwrap();
        assert_eq!(settings, DevhubSettings::default());
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.sources.app_config, vec![PathBuf::from("app-config.yaml")]);
        assert!(settings.output.pretty);
    }

    #[test]
    fn sections_override_defaults() {
        let settings = load_settings_from_str(
            r#"
[logging]
level = "debug"

[sources]
app_config = ["app-config.yaml", "app-config.local.yaml"]

[output]
pretty = false
"#,
        )
        .unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.sources.app_config.len(), 2);
        assert!(!settings.output.pretty);
    }

    #[test]
    fn env_overrides_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("devhub.toml", "[logging]\nlevel = \"info\"\n")?;
            jail.set_env("DEVHUB_LOGGING_LEVEL", "trace");
            jail.set_env("DEVHUB_OUTPUT_PRETTY", "false");
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            let settings = load_settings()?;
            assert_eq!(settings.logging.level, "trace");
            assert!(!settings.output.pretty);
            Ok(())
        });
    }

    #[test]
    fn env_override_with_underscored_key() {
        figment::Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            jail.set_env("DEVHUB_SOURCES_APP_CONFIG", "[\"app-config.production.yaml\"]");
            let settings = load_settings()?;
            assert_eq!(
                settings.sources.app_config,
                vec![PathBuf::from("app-config.production.yaml")]
            );
            Ok(())
        });
    }
}
