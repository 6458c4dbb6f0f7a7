// SPDX-FileCopyrightText: 2026 Devhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! App-config files in a temporary directory.

use std::path::{Path, PathBuf};

use devhub_config::{load_app_config, AppConfig};
use devhub_core::DevhubError;
use tempfile::TempDir;

/// A set of app-config files, removed when dropped.
pub struct TempAppConfig {
    dir: TempDir,
    files: Vec<PathBuf>,
}

impl TempAppConfig {
    pub fn new() -> Result<Self, DevhubError> {
        let dir = TempDir::new().map_err(|source| DevhubError::Io {
            path: std::env::temp_dir(),
            source,
        })?;
        Ok(Self {
            dir,
            files: Vec::new(),
        })
    }

    /// Write a file; later files override earlier ones when loaded.
    pub fn with_file(mut self, name: &str, content: &str) -> Result<Self, DevhubError> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).map_err(|source| DevhubError::Io {
            path: path.clone(),
            source,
        })?;
        self.files.push(path);
        Ok(self)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Load every written file in order.
    pub fn load(&self) -> Result<AppConfig, DevhubError> {
        load_app_config(self.files.as_slice())
    }
}
