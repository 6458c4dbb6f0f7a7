// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The "Created At" column, read from the `backstage.io/createdAt` annotation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::column::Column;
use crate::row::CatalogTableRow;

pub const CREATED_AT_ANNOTATION: &str = "backstage.io/createdAt";
pub const CREATED_AT_ID: &str = "createdAt";

/// Parse an annotation value as a timestamp. Accepts RFC 3339, a naive
/// date-time (taken as UTC) or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// ISO form used for ordering. Empty when the value is missing or unparsable.
fn sort_key(row: &CatalogTableRow) -> String {
    row.entity
        .annotation(CREATED_AT_ANNOTATION)
        .and_then(parse_timestamp)
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Renders the raw annotation when it parses as a date, else an empty cell.
pub fn created_at_column() -> Column {
    Column::new(
        "Created At",
        format!("entity.metadata.annotations.{CREATED_AT_ANNOTATION}"),
        |row| {
            row.entity
                .annotation(CREATED_AT_ANNOTATION)
                .filter(|raw| parse_timestamp(raw).is_some())
                .map(str::to_string)
                .unwrap_or_default()
        },
    )
    .with_id(CREATED_AT_ID)
    .with_custom_sort(|a, b| sort_key(a).cmp(&sort_key(b)))
}
