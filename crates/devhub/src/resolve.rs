// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `devhub resolve` command implementation.

use devhub_config::AppConfig;
use devhub_core::DevhubError;
use devhub_plugin::resolve_plugins;

use crate::output::to_json;

/// Resolve `dynamicPlugins.frontend` and render the registry lists.
pub fn run_resolve(app: &AppConfig, pretty: bool) -> Result<String, DevhubError> {
    to_json(&resolve_plugins(&app.dynamic_plugins()), pretty)
}
