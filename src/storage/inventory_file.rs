//! Inventory document on disk
//!
//! The document is written as pretty-printed JSON (two-space indent) to a
//! temp file and renamed over the target, replacing any previous run's
//! output. There is no merging and no locking between concurrent runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::InventoryDocument;

#[derive(Debug, Error)]
pub enum InventoryFileError {
    #[error("Inventory file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read inventory file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse inventory file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to serialize inventory as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The JSON inventory at a fixed path
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the inventory file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the YAML copy (same stem, `.yaml` extension)
    pub fn yaml_path(&self) -> PathBuf {
        self.path.with_extension("yaml")
    }

    /// Reads and parses the inventory
    pub fn read(&self) -> Result<InventoryDocument, InventoryFileError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(InventoryFileError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(InventoryFileError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| InventoryFileError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes the inventory, creating parent directories as needed
    pub fn write(&self, document: &InventoryDocument) -> Result<(), InventoryFileError> {
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');
        write_atomic(&self.path, json.as_bytes())
    }

    /// Writes a YAML copy of the inventory next to the JSON file
    pub fn write_yaml(&self, document: &InventoryDocument) -> Result<PathBuf, InventoryFileError> {
        let yaml = serde_yaml::to_string(document)?;
        let path = self.yaml_path();
        write_atomic(&path, yaml.as_bytes())?;
        Ok(path)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), InventoryFileError> {
    let write_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: io::Error| InventoryFileError::Write { path, source }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err(parent))?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, bytes).map_err(write_err(&temp_path))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(write_err(path))
}
