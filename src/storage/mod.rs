//! # Storage Layer
//!
//! Everything that touches disk apart from the scan itself.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Inventory | Pretty JSON (2-space indent) | `scan.output_path` |
//! | Inventory copy | YAML (optional) | `scan.output_path` with `.yaml` extension |
//! | Config | TOML | `--config`, `docinv.toml`, or global `config.toml` |
//! | Repository inventory | JSON (read only, optional) | `validate.repo_inventory_path` |
//!
//! ## Key Types
//!
//! - [`Config`] - Scan and validate settings
//! - [`InventoryFile`] - Read/write the inventory document
//! - [`RepoInventory`] - Companion repository list

mod config;
mod inventory_file;
mod repo_inventory;

pub use config::{Config, ConfigError, ScanConfig, ValidateConfig, CONFIG_FILE_NAME};
pub use inventory_file::{InventoryFile, InventoryFileError};
pub use repo_inventory::RepoInventory;
