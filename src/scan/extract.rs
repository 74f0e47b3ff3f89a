//! Per-file metadata extraction

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use thiserror::Error;

use super::history::HistoryLookup;
use super::language::detect_languages;
use super::repo::{repo_name, resolve_repo_root};
use crate::domain::{iso_timestamp, Category, DocRecord};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read metadata for {}: {source}", .path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("Failed to detect languages in {}: {source}", .repo.display())]
    Languages { repo: PathBuf, source: io::Error },

    #[error("{} is not a file name", .path.display())]
    NoFileName { path: PathBuf },
}

/// Builds [`DocRecord`]s for qualifying files
pub struct Extractor<'a> {
    history: &'a dyn HistoryLookup,
    repo_marker: &'a str,
    categories: &'a BTreeMap<String, Category>,
}

impl<'a> Extractor<'a> {
    pub fn new(
        history: &'a dyn HistoryLookup,
        repo_marker: &'a str,
        categories: &'a BTreeMap<String, Category>,
    ) -> Self {
        Self {
            history,
            repo_marker,
            categories,
        }
    }

    /// Extracts the record for one file
    pub fn extract(&self, path: &Path) -> Result<DocRecord, ExtractError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| ExtractError::NoFileName {
                path: path.to_path_buf(),
            })?;

        let metadata = fs::metadata(path).map_err(|source| ExtractError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        let repo_root = resolve_repo_root(path, self.repo_marker);

        let languages = detect_languages(&repo_root).map_err(|source| ExtractError::Languages {
            repo: repo_root.clone(),
            source,
        })?;

        let last_modified = self
            .history
            .last_commit_time(path)
            .or_else(|| filesystem_mtime(&metadata));

        Ok(DocRecord {
            path: path.display().to_string(),
            repo_path: repo_root.display().to_string(),
            repo_name: repo_name(&repo_root),
            category: self.category_for(path),
            languages,
            last_modified,
            last_modified_iso: last_modified.and_then(iso_timestamp),
            filename,
            relative_path: relative_path(path, &repo_root),
        })
    }

    /// Category from the name of the file's grandparent directory
    fn category_for(&self, path: &Path) -> Category {
        let Some(name) = path
            .parent()
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
        else {
            return Category::Other;
        };

        self.categories
            .get(name)
            .copied()
            .unwrap_or_else(|| Category::from_group_dir(name))
    }
}

fn filesystem_mtime(metadata: &fs::Metadata) -> Option<i64> {
    let modified = metadata.modified().ok()?;
    let secs = modified.duration_since(UNIX_EPOCH).ok()?.as_secs();
    i64::try_from(secs).ok()
}

/// `/`-separated path of `file` below `root`
fn relative_path(file: &Path, root: &Path) -> String {
    match file.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => file.display().to_string(),
    }
}
