// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mount-point visibility predicates.
//!
//! [`compile`] turns an `if` block into a [`Predicate`] once, at load time.
//! Evaluation is pure and the compiled predicate can be shared freely.
//!
//! | block   | result |
//! |---------|--------|
//! | `allOf` | every atom is true (an empty list is true) |
//! | `anyOf` | at least one atom is true (an empty list is false) |
//! | `oneOf` | exactly one atom is true (an empty list is false) |
//! | none    | true |
//!
//! When several lists are present only the first of `allOf`, `anyOf`,
//! `oneOf` is used.

use std::fmt;
use std::sync::Arc;

use devhub_config::{Condition, ConditionFn, MountPointConfigRawIf};
use devhub_core::{ApiContext, Entity};
use tracing::warn;

/// A compiled visibility predicate.
#[derive(Clone, Default)]
pub enum Predicate {
    #[default]
    Always,
    AllOf(Vec<ConditionFn>),
    AnyOf(Vec<ConditionFn>),
    OneOf(Vec<ConditionFn>),
}

impl Predicate {
    pub fn evaluate(&self, entity: &Entity, context: Option<&ApiContext>) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::AllOf(atoms) => atoms.iter().all(|f| f(entity, context)),
            Predicate::AnyOf(atoms) => atoms.iter().any(|f| f(entity, context)),
            Predicate::OneOf(atoms) => atoms.iter().filter(|f| f(entity, context)).count() == 1,
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Always => f.write_str("Always"),
            Predicate::AllOf(atoms) => write!(f, "AllOf({} atoms)", atoms.len()),
            Predicate::AnyOf(atoms) => write!(f, "AnyOf({} atoms)", atoms.len()),
            Predicate::OneOf(atoms) => write!(f, "OneOf({} atoms)", atoms.len()),
        }
    }
}

/// Compile an `if` block. `None` compiles to [`Predicate::Always`].
pub fn compile(conditional: Option<&MountPointConfigRawIf>) -> Predicate {
    let Some(conditional) = conditional else {
        return Predicate::Always;
    };
    let atoms = |conditions: &[Condition]| -> Vec<ConditionFn> {
        conditions.iter().map(conditions_array_mapper).collect()
    };
    if let Some(all_of) = &conditional.all_of {
        Predicate::AllOf(atoms(all_of))
    } else if let Some(any_of) = &conditional.any_of {
        Predicate::AnyOf(atoms(any_of))
    } else if let Some(one_of) = &conditional.one_of {
        Predicate::OneOf(atoms(one_of))
    } else {
        Predicate::Always
    }
}

/// Turn one condition into a callable atom. Unrecognised conditions always
/// evaluate false.
pub fn conditions_array_mapper(condition: &Condition) -> ConditionFn {
    match condition {
        Condition::Callable(f) => Arc::clone(f),
        Condition::IsKind(kinds) => {
            let kinds = kinds.clone();
            Arc::new(move |entity: &Entity, _: Option<&ApiContext>| {
                matches_any(entity.kind(), &kinds)
            })
        }
        Condition::IsType(types) => {
            let types = types.clone();
            Arc::new(move |entity: &Entity, _: Option<&ApiContext>| {
                matches_any(entity.spec_type(), &types)
            })
        }
        Condition::HasAnnotation(key) => {
            let key = key.clone();
            Arc::new(move |entity: &Entity, _: Option<&ApiContext>| entity.has_annotation(&key))
        }
        Condition::Unknown(value) => {
            warn!(condition = %value, "unrecognised mount point condition; it will never match");
            Arc::new(|_: &Entity, _: Option<&ApiContext>| false)
        }
    }
}

/// ASCII case folding, the same rule catalog kind filters use.
fn matches_any(actual: Option<&str>, expected: &[String]) -> bool {
    actual.is_some_and(|actual| expected.iter().any(|e| e.eq_ignore_ascii_case(actual)))
}
