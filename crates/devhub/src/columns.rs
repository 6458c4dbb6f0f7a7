// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `devhub columns` command implementation.

use devhub_catalog::{create_catalog_columns_func, ViewContext};
use devhub_config::AppConfig;
use devhub_core::DevhubError;

use crate::output::to_json;

pub fn run_columns(app: &AppConfig, view: &ViewContext, pretty: bool) -> Result<String, DevhubError> {
    let columns = create_catalog_columns_func(app.catalog_columns())(view);
    to_json(&columns, pretty)
}
