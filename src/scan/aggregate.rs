//! Scan driver: walk, filter, extract, assemble
//!
//! Files are processed one at a time in traversal order. Anything that goes
//! wrong for a single directory or file becomes a [`SkipNotice`] and the scan
//! carries on; only a missing root is fatal.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use super::extract::Extractor;
use super::filter::InclusionFilter;
use super::history::HistoryLookup;
use super::walker::walk;
use crate::domain::{DocRecord, InventoryDocument};
use crate::storage::ScanConfig;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to resolve scan root {}: {source}", .path.display())]
    Resolve { path: PathBuf, source: io::Error },
}

/// A directory or file left out of the inventory
#[derive(Debug, Clone)]
pub struct SkipNotice {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for SkipNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped {}: {}", self.path.display(), self.reason)
    }
}

/// Progress reported while the scan runs
#[derive(Debug)]
pub enum ScanEvent<'e> {
    Found(&'e DocRecord),
    Skipped(&'e SkipNotice),
}

/// Result of a completed scan
#[derive(Debug)]
pub struct ScanOutcome {
    pub document: InventoryDocument,
    pub skipped: Vec<SkipNotice>,
    /// Files seen by the walker, qualifying or not
    pub visited: usize,
}

pub struct Scanner<'a> {
    config: &'a ScanConfig,
    history: &'a dyn HistoryLookup,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig, history: &'a dyn HistoryLookup) -> Self {
        Self { config, history }
    }

    pub fn run(&self) -> Result<ScanOutcome, ScanError> {
        self.run_with(|_| {})
    }

    /// Runs the scan, reporting each record and skip as it happens
    pub fn run_with<F>(&self, mut on_event: F) -> Result<ScanOutcome, ScanError>
    where
        F: FnMut(ScanEvent<'_>),
    {
        let configured = &self.config.base_path;
        if !configured.exists() {
            return Err(ScanError::RootNotFound(configured.clone()));
        }
        if !configured.is_dir() {
            return Err(ScanError::NotADirectory(configured.clone()));
        }

        // Repository resolution walks ancestors lexically, so `..` must be gone
        let root = fs::canonicalize(configured).map_err(|source| ScanError::Resolve {
            path: configured.clone(),
            source,
        })?;

        let scan_timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let filter = InclusionFilter::new(
            self.config.target_files.clone(),
            self.config.doc_directories.clone(),
            self.config.doc_extension.clone(),
        );
        let extractor = Extractor::new(
            self.history,
            &self.config.repo_marker,
            &self.config.categories,
        );

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut visited = 0;

        for entry in walk(&root, &self.config.skip_dirs) {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    let notice = SkipNotice {
                        reason: e.source.to_string(),
                        path: e.path,
                    };
                    on_event(ScanEvent::Skipped(&notice));
                    skipped.push(notice);
                    continue;
                }
            };

            visited += 1;
            if !filter.matches(&path) {
                continue;
            }

            match extractor.extract(&path) {
                Ok(record) => {
                    on_event(ScanEvent::Found(&record));
                    records.push(record);
                }
                Err(e) => {
                    let notice = SkipNotice {
                        path,
                        reason: e.to_string(),
                    };
                    on_event(ScanEvent::Skipped(&notice));
                    skipped.push(notice);
                }
            }
        }

        let document = InventoryDocument::assemble(
            scan_timestamp,
            root.display().to_string(),
            filter.target_files().to_vec(),
            filter.doc_directories().to_vec(),
            records,
        );

        Ok(ScanOutcome {
            document,
            skipped,
            visited,
        })
    }
}
