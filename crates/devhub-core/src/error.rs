// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Devhub workspace.
//!
//! Only the I/O boundary (reading app-config files and tool settings) returns
//! these. Resolution of plugin configuration never fails.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across Devhub crates.
#[derive(Debug, Error)]
pub enum DevhubError {
    /// Configuration errors (invalid structure, missing required sections).
    #[error("configuration error: {0}")]
    Config(String),

    /// A configuration source could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configuration source could not be parsed as YAML or JSON.
    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
