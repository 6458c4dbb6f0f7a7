// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic plugin configuration resolver.
//!
//! Plugins declare routes, menu entries, mount points, icons, API factories
//! and more under `dynamicPlugins.frontend`, keyed by plugin scope.
//! [`resolve`] flattens those declarations into a [`DynamicConfig`] with every
//! default applied, and [`DynamicRootConfig`] groups the result the way the
//! rendering shell consumes it, with mount-point visibility predicates
//! compiled by [`compile`].

pub mod aggregator;
pub mod defaults;
pub mod menu;
pub mod predicate;
pub mod registry;
pub mod types;

pub use aggregator::{resolve, resolve_plugins};
pub use defaults::{ApplyDefaults, DEFAULT_IMPORT_NAME, DEFAULT_MODULE};
pub use predicate::{compile, conditions_array_mapper, Predicate};
pub use registry::{DynamicRootConfig, ResolvedMountPoint};
pub use types::{DynamicConfig, MenuItem};
