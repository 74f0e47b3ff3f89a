//! Inclusion filter for documentation files

use std::path::{Component, Path};

/// Decides whether a file path is a documentation file.
///
/// A path qualifies when its file name is exactly one of `target_files`, or
/// when one of its components is a documentation directory and it carries the
/// documentation extension.
#[derive(Debug, Clone)]
pub struct InclusionFilter {
    target_files: Vec<String>,
    doc_directories: Vec<String>,
    doc_extension: String,
}

impl InclusionFilter {
    pub fn new(
        target_files: Vec<String>,
        doc_directories: Vec<String>,
        doc_extension: impl Into<String>,
    ) -> Self {
        let doc_extension = doc_extension.into();
        Self {
            target_files,
            doc_directories,
            doc_extension: doc_extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn target_files(&self) -> &[String] {
        &self.target_files
    }

    pub fn doc_directories(&self) -> &[String] {
        &self.doc_directories
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        if self.target_files.iter().any(|t| t == name) {
            return true;
        }

        self.has_doc_extension(path) && self.in_doc_directory(path)
    }

    fn has_doc_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.doc_extension)
    }

    fn in_doc_directory(&self, path: &Path) -> bool {
        // Only directory components count, not the file name itself
        let parent = match path.parent() {
            Some(p) => p,
            None => return false,
        };

        parent.components().any(|c| match c {
            Component::Normal(segment) => segment
                .to_str()
                .is_some_and(|s| self.doc_directories.iter().any(|d| d == s)),
            _ => false,
        })
    }
}
