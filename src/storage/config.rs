//! Configuration handling for doc-inventory
//!
//! Configuration is read from, in order of preference: an explicit
//! `--config` file, a `docinv.toml` in the current directory or one of its
//! ancestors, or `config.toml` in the platform config directory
//! (`~/.config/docinv/config.toml` on Linux). Built-in defaults apply when
//! none exists.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Category;

/// Name of the per-directory configuration file
pub const CONFIG_FILE_NAME: &str = "docinv.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for `docinv scan`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory to scan
    pub base_path: PathBuf,

    /// Where the inventory JSON is written
    pub output_path: PathBuf,

    /// File names that always qualify, wherever they are
    pub target_files: Vec<String>,

    /// Directory names whose documentation-extension files qualify
    pub doc_directories: Vec<String>,

    /// Documentation file extension, without the dot
    pub doc_extension: String,

    /// Directory names never descended into
    pub skip_dirs: Vec<String>,

    /// Entry name marking a repository root
    pub repo_marker: String,

    /// Look up last-modified times in git history before falling back to mtime
    pub use_git_history: bool,

    /// Program used for history lookups
    pub git_program: PathBuf,

    /// Also write a YAML copy next to the JSON output
    pub write_yaml: bool,

    /// Extra grouping-directory names mapped to categories
    pub categories: BTreeMap<String, Category>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            output_path: PathBuf::from("doc-cache/documentation_inventory.json"),
            target_files: [
                "README.md",
                "CHANGELOG.md",
                "AGENTS.md",
                "CLAUDE.md",
                "WARP.md",
                "CONTRIBUTING.md",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            doc_directories: vec!["docs".to_string()],
            doc_extension: "md".to_string(),
            skip_dirs: vec![".git".to_string()],
            repo_marker: ".git".to_string(),
            use_git_history: true,
            git_program: PathBuf::from("git"),
            write_yaml: false,
            categories: BTreeMap::new(),
        }
    }
}

/// Settings for `docinv validate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Category used for the filter-by-category check
    pub category: Category,

    /// Language used for the filter-by-language check
    pub language: String,

    /// Size of the most-recent list
    pub recent_limit: usize,

    /// Rows in the table projection
    pub table_limit: usize,

    /// Optional companion repository inventory
    pub repo_inventory_path: Option<PathBuf>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            category: Category::RustComponent,
            language: "Rust".to_string(),
            recent_limit: 5,
            table_limit: 10,
            repo_inventory_path: Some(PathBuf::from("repo_inventory.json")),
        }
    }
}

/// Combined configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub validate: ValidateConfig,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, preferring an explicit file if given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            return Self::from_file(path);
        }

        if let Some(path) = Self::find_config_file() {
            return Self::from_file(&path);
        }

        if let Some(path) = Self::global_config_dir().map(|d| d.join("config.toml")) {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Reads a configuration file.
    ///
    /// Relative paths inside it are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "docinv", "docinv").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Finds `docinv.toml` in the current directory or an ancestor
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    fn resolve_relative_to(&mut self, dir: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        };

        resolve(&mut self.scan.base_path);
        resolve(&mut self.scan.output_path);
        if let Some(p) = self.validate.repo_inventory_path.as_mut() {
            resolve(p);
        }
    }

    /// Serializes the effective configuration
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
