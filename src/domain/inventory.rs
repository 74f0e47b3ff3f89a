//! Inventory document
//!
//! The complete artifact produced by one scan: the sorted record list,
//! summary statistics and the patterns that selected the files.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::record::{Category, DocRecord};

/// Summary counts over the record list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_files: usize,
    pub repositories_found: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_language: BTreeMap<String, usize>,
}

impl Statistics {
    /// Computes statistics for a set of records.
    ///
    /// A record contributes to every language it lists, so the language
    /// counts may sum to more than `total_files`.
    pub fn compute(records: &[DocRecord]) -> Self {
        let repositories: BTreeSet<&str> = records.iter().map(|r| r.repo_name.as_str()).collect();

        let mut by_category = BTreeMap::new();
        let mut by_language = BTreeMap::new();

        for record in records {
            *by_category
                .entry(record.category.label().to_string())
                .or_insert(0) += 1;

            for language in &record.languages {
                *by_language.entry(language.clone()).or_insert(0) += 1;
            }
        }

        Self {
            total_files: records.len(),
            repositories_found: repositories.len(),
            by_category,
            by_language,
        }
    }
}

/// The JSON index written by `docinv scan`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDocument {
    pub scan_timestamp: String,
    pub base_path: String,
    pub statistics: Statistics,
    pub target_files: Vec<String>,
    pub doc_directories: Vec<String>,
    pub documentation_files: Vec<DocRecord>,
}

/// One row of the tabular projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub repo: String,
    pub file: String,
    pub category: String,
    pub languages: String,
    pub modified: String,
}

impl InventoryDocument {
    /// Sorts the records and computes statistics
    pub fn assemble(
        scan_timestamp: String,
        base_path: String,
        target_files: Vec<String>,
        doc_directories: Vec<String>,
        mut records: Vec<DocRecord>,
    ) -> Self {
        records.sort_by(|a, b| a.sort_order(b));
        let statistics = Statistics::compute(&records);

        Self {
            scan_timestamp,
            base_path,
            statistics,
            target_files,
            doc_directories,
            documentation_files: records,
        }
    }

    /// Returns true if the document holds no records
    pub fn is_empty(&self) -> bool {
        self.documentation_files.is_empty()
    }

    /// Records in the given category
    pub fn by_category(&self, category: Category) -> Vec<&DocRecord> {
        self.documentation_files
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Records listing the given language
    pub fn with_language(&self, language: &str) -> Vec<&DocRecord> {
        self.documentation_files
            .iter()
            .filter(|r| r.has_language(language))
            .collect()
    }

    /// Most recently modified records first; undated records sort last
    pub fn most_recent(&self, limit: usize) -> Vec<&DocRecord> {
        let mut records: Vec<&DocRecord> = self.documentation_files.iter().collect();
        // Option<i64> orders None lowest, so reversing puts it last
        records.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));
        records.truncate(limit);
        records
    }

    /// Projects the first `limit` records into display rows
    pub fn table(&self, limit: usize) -> Vec<TableRow> {
        self.documentation_files
            .iter()
            .take(limit)
            .map(|r| TableRow {
                repo: r.repo_name.clone(),
                file: r.relative_path.clone(),
                category: r.category.label().to_string(),
                languages: r.languages.join(", "),
                modified: r
                    .last_modified_iso
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect()
    }
}
