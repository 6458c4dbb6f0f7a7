// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table column descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::row::CatalogTableRow;

pub type RenderFn = Arc<dyn Fn(&CatalogTableRow) -> String + Send + Sync>;
pub type SortFn = Arc<dyn Fn(&CatalogTableRow, &CatalogTableRow) -> Ordering + Send + Sync>;

/// A catalog table column: how to render a cell and, optionally, how to
/// order two rows.
#[derive(Clone)]
pub struct Column {
    /// Built-in column id, used by `exclude`. Custom columns have none.
    pub id: Option<String>,
    pub title: String,
    pub field: String,
    /// `Some(false)` disables sorting on this column.
    pub sorting: Option<bool>,
    /// CSS width, e.g. `150px`.
    pub width: Option<String>,
    pub hidden: bool,
    render: RenderFn,
    custom_sort: Option<SortFn>,
}

impl Column {
    pub fn new<F>(title: impl Into<String>, field: impl Into<String>, render: F) -> Self
    where
        F: Fn(&CatalogTableRow) -> String + Send + Sync + 'static,
    {
        Self {
            id: None,
            title: title.into(),
            field: field.into(),
            sorting: None,
            width: None,
            hidden: false,
            render: Arc::new(render),
            custom_sort: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_custom_sort<F>(mut self, sort: F) -> Self
    where
        F: Fn(&CatalogTableRow, &CatalogTableRow) -> Ordering + Send + Sync + 'static,
    {
        self.custom_sort = Some(Arc::new(sort));
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn render(&self, row: &CatalogTableRow) -> String {
        (self.render)(row)
    }

    pub fn has_custom_sort(&self) -> bool {
        self.custom_sort.is_some()
    }

    /// Compare two rows with the column's comparator, if it has one.
    pub fn custom_sort(&self, a: &CatalogTableRow, b: &CatalogTableRow) -> Option<Ordering> {
        self.custom_sort.as_ref().map(|sort| sort(a, b))
    }

    pub fn is_sortable(&self) -> bool {
        self.sorting != Some(false)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("sorting", &self.sorting)
            .field("width", &self.width)
            .field("hidden", &self.hidden)
            .field("custom_sort", &self.custom_sort.is_some())
            .finish_non_exhaustive()
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Column", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("hidden", &self.hidden)?;
        state.serialize_field("sortable", &self.is_sortable())?;
        state.end()
    }
}
