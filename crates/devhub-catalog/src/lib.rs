// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog table columns for Devhub.
//!
//! [`create_catalog_columns_func`] binds a `catalog.table.columns` block to a
//! resolver that yields the ordered [`Column`] list for each catalog view.
//! Resolution never fails: unknown ids are skipped and unresolvable field
//! paths render as the column's default value.

pub mod builtin;
pub mod column;
pub mod columns;
pub mod created_at;
pub mod row;
pub mod view;

pub use builtin::default_columns;
pub use column::Column;
pub use columns::{create_catalog_columns_func, create_custom_column, CatalogColumnsFunc, ColumnComposer};
pub use created_at::{created_at_column, CREATED_AT_ANNOTATION};
pub use row::CatalogTableRow;
pub use view::ViewContext;
