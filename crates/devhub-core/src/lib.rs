// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Devhub developer portal.
//!
//! Provides the error type, the catalog entity model, the API holder passed to
//! visibility predicates, and the nested field-path lookup used by custom
//! catalog columns.

pub mod context;
pub mod entity;
pub mod error;
pub mod path;

pub use context::ApiContext;
pub use entity::Entity;
pub use error::DevhubError;
