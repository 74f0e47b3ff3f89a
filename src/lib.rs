//! doc-inventory - index documentation files across many repositories
//!
//! Walks a directory of repositories, picks out documentation files
//! (README, CHANGELOG, anything under `docs/`), records per-file metadata
//! and writes a single JSON inventory. A separate `validate` command checks
//! that an inventory can be read and queried.

pub mod domain;
pub mod scan;
pub mod storage;
pub mod cli;

pub use domain::{Category, DocRecord, InventoryDocument, Statistics};
pub use scan::{ScanOutcome, Scanner};
pub use storage::{Config, InventoryFile, ScanConfig};
