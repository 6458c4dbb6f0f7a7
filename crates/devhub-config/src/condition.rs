// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mount-point visibility conditions.
//!
//! A condition is tagged once, when configuration is parsed, so evaluation
//! switches on the variant instead of inspecting object keys.

use std::fmt;
use std::sync::Arc;

use devhub_core::{ApiContext, Entity};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Keys recognised on a declarative condition object, in priority order.
pub const CONDITION_KEYS: &[&str] = &["isKind", "isType", "hasAnnotation"];

/// A predicate supplied as code rather than configuration.
pub type ConditionFn = Arc<dyn Fn(&Entity, Option<&ApiContext>) -> bool + Send + Sync>;

/// One atom of a `allOf` / `anyOf` / `oneOf` list.
#[derive(Clone)]
pub enum Condition {
    /// Invoked directly with the entity and context.
    Callable(ConditionFn),
    /// Case-insensitive match of `kind` against any listed value.
    IsKind(Vec<String>),
    /// Case-insensitive match of `spec.type` against any listed value.
    IsType(Vec<String>),
    /// Presence of an annotation key in `metadata.annotations`.
    HasAnnotation(String),
    /// A shape matching none of the above. Always evaluates false.
    Unknown(Value),
}

impl Condition {
    /// Wrap a closure as a callable condition.
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&Entity, Option<&ApiContext>) -> bool + Send + Sync + 'static,
    {
        Condition::Callable(Arc::new(f))
    }

    /// Tag a raw configuration value.
    ///
    /// Keys are tried in the order `isKind`, `isType`, `hasAnnotation`. The
    /// first key holding a truthy value binds the atom; a falsy value (`null`,
    /// `false`, `0`, `""`) is treated as absent. A bound value of the wrong
    /// shape makes the whole atom unknown.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Condition::Unknown(value.clone());
        };
        let bound = CONDITION_KEYS
            .iter()
            .find_map(|key| obj.get(*key).filter(|v| is_truthy(v)).map(|v| (*key, v)));
        let parsed = match bound {
            Some(("isKind", v)) => string_list(v).map(Condition::IsKind),
            Some(("isType", v)) => string_list(v).map(Condition::IsType),
            Some((_, v)) => v.as_str().map(|key| Condition::HasAnnotation(key.to_string())),
            None => None,
        };
        parsed.unwrap_or_else(|| Condition::Unknown(value.clone()))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Condition::Unknown(_))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A non-empty string becomes a one-element list; an array must hold only strings.
fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) if !s.is_empty() => Some(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

fn list_value(values: &[String]) -> Value {
    match values {
        [single] => Value::String(single.clone()),
        many => json!(many),
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Callable(_) => f.write_str("Callable(..)"),
            Condition::IsKind(k) => f.debug_tuple("IsKind").field(k).finish(),
            Condition::IsType(t) => f.debug_tuple("IsType").field(t).finish(),
            Condition::HasAnnotation(a) => f.debug_tuple("HasAnnotation").field(a).finish(),
            Condition::Unknown(v) => f.debug_tuple("Unknown").field(v).finish(),
        }
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Condition::Callable(a), Condition::Callable(b)) => Arc::ptr_eq(a, b),
            (Condition::IsKind(a), Condition::IsKind(b)) => a == b,
            (Condition::IsType(a), Condition::IsType(b)) => a == b,
            (Condition::HasAnnotation(a), Condition::HasAnnotation(b)) => a == b,
            (Condition::Unknown(a), Condition::Unknown(b)) => a == b,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Condition::from_value(&value))
    }
}

/// Callables have no configuration form and serialize as `null`.
impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            Condition::Callable(_) => Value::Null,
            Condition::IsKind(k) => json!({ "isKind": list_value(k) }),
            Condition::IsType(t) => json!({ "isType": list_value(t) }),
            Condition::HasAnnotation(a) => json!({ "hasAnnotation": a }),
            Condition::Unknown(v) => v.clone(),
        };
        value.serialize(serializer)
    }
}

/// The `if` block of a mount point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPointConfigRawIf {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Condition>>,
}

impl MountPointConfigRawIf {
    pub fn all_of(conditions: Vec<Condition>) -> Self {
        Self { all_of: Some(conditions), ..Self::default() }
    }

    pub fn any_of(conditions: Vec<Condition>) -> Self {
        Self { any_of: Some(conditions), ..Self::default() }
    }

    pub fn one_of(conditions: Vec<Condition>) -> Self {
        Self { one_of: Some(conditions), ..Self::default() }
    }

    /// Every condition across the three lists.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        [&self.all_of, &self.any_of, &self.one_of]
            .into_iter()
            .flatten()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_declarative_shapes() {
        assert_eq!(
            Condition::from_value(&json!({ "isKind": "Component" })),
            Condition::IsKind(vec!["Component".into()])
        );
        assert_eq!(
            Condition::from_value(&json!({ "isKind": ["Component", "API"] })),
            Condition::IsKind(vec!["Component".into(), "API".into()])
        );
        assert_eq!(
            Condition::from_value(&json!({ "isType": "service" })),
            Condition::IsType(vec!["service".into()])
        );
        assert_eq!(
            Condition::from_value(&json!({ "hasAnnotation": "custom/tier" })),
            Condition::HasAnnotation("custom/tier".into())
        );
    }

    #[test]
    fn priority_order_resolves_ambiguous_objects() {
        let both = json!({ "hasAnnotation": "x", "isType": "service" });
        assert_eq!(
            Condition::from_value(&both),
            Condition::IsType(vec!["service".into()])
        );
    }

    #[test]
    fn empty_string_falls_through() {
        let value = json!({ "isKind": "", "hasAnnotation": "custom/tier" });
        assert_eq!(
            Condition::from_value(&value),
            Condition::HasAnnotation("custom/tier".into())
        );
    }

    #[test]
    fn falsy_values_fall_through() {
        for falsy in [json!(null), json!(false), json!(0)] {
            let value = json!({ "isKind": falsy, "isType": "service" });
            assert_eq!(
                Condition::from_value(&value),
                Condition::IsType(vec!["service".into()])
            );
        }
    }

    #[test]
    fn malformed_kind_list_does_not_fall_through() {
        let value = json!({ "isKind": ["component", 1], "isType": "service" });
        assert!(Condition::from_value(&value).is_unknown());
        let value = json!({ "isType": true, "hasAnnotation": "custom/tier" });
        assert!(Condition::from_value(&value).is_unknown());
    }

    #[test]
    fn unrecognised_shapes_are_unknown() {
        assert!(Condition::from_value(&json!({ "isOwner": "team-a" })).is_unknown());
        assert!(Condition::from_value(&json!("isKind")).is_unknown());
        assert!(Condition::from_value(&json!({ "isKind": 3 })).is_unknown());
        assert!(Condition::from_value(&json!({ "isKind": ["a", 1] })).is_unknown());
        assert!(Condition::from_value(&json!({ "hasAnnotation": ["a"] })).is_unknown());
    }

    #[test]
    fn if_block_deserializes_from_camel_case() {
        let raw: MountPointConfigRawIf = serde_json::from_value(json!({
            "allOf": [{ "isKind": "component" }, { "hasAnnotation": "a/b" }],
            "oneOf": []
        }))
        .unwrap();
        assert_eq!(raw.all_of.as_ref().map(Vec::len), Some(2));
        assert!(raw.any_of.is_none());
        assert_eq!(raw.one_of, Some(vec![]));
        assert_eq!(raw.conditions().count(), 2);
    }

    #[test]
    fn serializes_back_to_configuration_form() {
        let raw = MountPointConfigRawIf::any_of(vec![
            Condition::IsKind(vec!["api".into()]),
            Condition::callable(|_, _| true),
        ]);
        let value = serde_json::to_value(&raw).unwrap();
        assert_eq!(value, json!({ "anyOf": [{ "isKind": "api" }, null] }));
    }
}
