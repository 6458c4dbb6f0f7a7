// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested field-path lookup into JSON documents.
//!
//! Paths use dot segments and bracket segments, quoted or not:
//! `metadata.name`, `spec.ports[0].name`,
//! `metadata.annotations['custom/security-tier']`.
//! Lookups never fail: a path that does not resolve yields `None`.

use serde_json::Value;

/// One step of a parsed field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key (also matches a numeric array index when it parses as one).
    Key(String),
    /// Array index written as `[n]`.
    Index(usize),
}

/// Parse a field path into segments.
///
/// Empty segments (leading dots, `a..b`) are skipped. An unterminated bracket
/// consumes the rest of the input as a single key.
pub fn parse_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut current)));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(PathSegment::Key(std::mem::take(&mut current)));
                }
                let quote = match chars.peek() {
                    Some(&q @ ('\'' | '"')) => {
                        chars.next();
                        Some(q)
                    }
                    _ => None,
                };
                let mut inner = String::new();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match quote {
                        Some(q) if c == q && chars.peek() == Some(&']') => {
                            chars.next();
                            closed = true;
                            break;
                        }
                        None if c == ']' => {
                            closed = true;
                            break;
                        }
                        _ => inner.push(c),
                    }
                }
                if !closed {
                    if let Some(q) = quote {
                        inner.insert(0, q);
                    }
                    segments.push(PathSegment::Key(inner));
                    break;
                }
                match (quote, inner.parse::<usize>()) {
                    (None, Ok(index)) => segments.push(PathSegment::Index(index)),
                    _ => segments.push(PathSegment::Key(inner)),
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(PathSegment::Key(current));
    }
    segments
}

/// Resolve `path` against `root`. `null` leaves count as unresolved.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_path(path);
    if segments.is_empty() {
        return None;
    }
    let mut current = root;
    for segment in &segments {
        current = match (segment, current) {
            (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
            (PathSegment::Key(key), Value::Array(items)) => items.get(key.parse::<usize>().ok()?)?,
            (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
            (PathSegment::Index(index), Value::Object(map)) => map.get(&index.to_string())?,
            _ => return None,
        };
    }
    if current.is_null() { None } else { Some(current) }
}

/// Render a resolved value as display text.
///
/// Scalars print as themselves, arrays join their elements with `,`, and
/// objects print as compact JSON. `null` renders as `None`.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| display_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => serde_json::to_string(value).ok(),
    }
}
