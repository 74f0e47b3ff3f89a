//! Companion repository inventory
//!
//! An optional JSON file listing repositories by kind
//! (`rust_repos`, `typescript_repos`). Only its size is used.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::inventory_file::InventoryFileError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepoInventory {
    pub rust_repos: Vec<serde_json::Value>,
    pub typescript_repos: Vec<serde_json::Value>,
}

impl RepoInventory {
    /// Reads the file if it exists.
    ///
    /// Returns `Ok(None)` when the file is absent.
    pub fn read_optional(path: &Path) -> Result<Option<Self>, InventoryFileError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(InventoryFileError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| InventoryFileError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Total repositories listed
    pub fn repository_count(&self) -> usize {
        self.rust_repos.len() + self.typescript_repos.len()
    }
}
