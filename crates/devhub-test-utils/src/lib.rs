// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test fixtures for Devhub integration tests.
//!
//! - [`EntityBuilder`] - catalog entities with only the fields a test cares about
//! - [`TempAppConfig`] - app-config files written to a temporary directory
//! - [`fixtures`] - sample plugin configurations

pub mod app_config;
pub mod entity;
pub mod fixtures;

pub use app_config::TempAppConfig;
pub use entity::EntityBuilder;
