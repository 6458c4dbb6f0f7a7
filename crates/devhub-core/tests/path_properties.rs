// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for field-path lookup.

use devhub_core::path::{lookup, parse_path, PathSegment};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_/-]{0,8}"
}

proptest! {
    /// A value nested under any chain of keys is found through both the
    /// dotted and the bracket-quoted spelling of the path.
    #[test]
    fn nested_keys_resolve(keys in prop::collection::vec(key(), 1..5), leaf in "[a-zA-Z0-9 ]{0,12}") {
        let mut doc = Value::String(leaf.clone());
        for k in keys.iter().rev() {
            let mut map = Map::new();
            map.insert(k.clone(), doc);
            doc = Value::Object(map);
        }

        let bracketed: String = keys.iter().map(|k| format!("['{k}']")).collect();
        prop_assert_eq!(lookup(&doc, &bracketed), Some(&Value::String(leaf.clone())));

        if keys.iter().all(|k| !k.contains('/')) {
            let dotted = keys.join(".");
            prop_assert_eq!(lookup(&doc, &dotted), Some(&Value::String(leaf)));
        }
    }

    /// Lookup never panics on arbitrary input paths.
    #[test]
    fn arbitrary_paths_do_not_panic(path in ".{0,40}") {
        let doc = json!({ "a": { "b": [1, 2, { "c": true }] } });
        let _ = lookup(&doc, &path);
        let _ = parse_path(&path);
    }
}

#[test]
fn index_segments_parse_as_indices() {
    assert_eq!(
        parse_path("items[2]"),
        vec![PathSegment::Key("items".into()), PathSegment::Index(2)]
    );
}
