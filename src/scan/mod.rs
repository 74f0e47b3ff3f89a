//! # Scanning
//!
//! Turns a directory tree into an [`InventoryDocument`](crate::domain::InventoryDocument).
//!
//! ## Pipeline
//!
//! | Stage | Module | Failure mode |
//! |-------|--------|--------------|
//! | Walk | [`walk`] | unreadable directory skipped |
//! | Filter | [`InclusionFilter`] | none (pure predicate) |
//! | Resolve repository | [`resolve_repo_root`] | falls back to parent dir |
//! | Detect languages | [`detect_languages`] | file skipped |
//! | Last modified | [`HistoryLookup`] | falls back to filesystem mtime |
//! | Assemble | [`Scanner`] | missing root is fatal |
//!
//! Everything runs sequentially on the calling thread.

mod walker;
mod filter;
mod repo;
mod language;
mod history;
mod extract;
mod aggregate;

pub use walker::{walk, WalkError};
pub use filter::InclusionFilter;
pub use repo::{repo_name, resolve_repo_root};
pub use language::{detect_languages, LanguageRule, Marker, LANGUAGE_RULES};
pub use history::{GitHistory, HistoryLookup, NoHistory};
pub use extract::{ExtractError, Extractor};
pub use aggregate::{ScanError, ScanEvent, ScanOutcome, Scanner, SkipNotice};
