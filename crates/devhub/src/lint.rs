// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `devhub lint` command implementation.

use devhub_config::validation::{lint_catalog_columns, lint_frontend};
use devhub_config::{AppConfig, ConfigError};

/// Collect diagnostics for the plugin and catalog column sections.
pub fn run_lint(app: &AppConfig) -> Vec<ConfigError> {
    let mut findings = app.frontend_value().map(lint_frontend).unwrap_or_default();
    if let Some(columns) = app.catalog_columns() {
        findings.extend(lint_catalog_columns(&columns));
    }
    findings
}
