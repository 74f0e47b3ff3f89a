//! `docinv validate` - check that an inventory supports the expected queries
//!
//! Reads the inventory and runs the read-only queries a downstream consumer
//! relies on: filter by category, filter by language, most recent first with
//! a limit, and a tabular projection. A missing or unparsable file is fatal.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::output::Output;
use crate::domain::{Category, DocRecord};
use crate::storage::{Config, InventoryFile, RepoInventory, ValidateConfig};

#[derive(Debug, Default, Args)]
pub struct ValidateArgs {
    /// Inventory file to validate (defaults to the configured output path)
    pub path: Option<PathBuf>,

    /// Category for the filter check
    #[arg(long)]
    pub category: Option<Category>,

    /// Language for the filter check
    #[arg(long)]
    pub language: Option<String>,

    /// Number of entries in the most-recent list
    #[arg(long)]
    pub limit: Option<usize>,

    /// Companion repository inventory to count, if present
    #[arg(long)]
    pub repo_inventory: Option<PathBuf>,
}

impl ValidateArgs {
    fn apply(self, mut validate: ValidateConfig) -> (Option<PathBuf>, ValidateConfig) {
        if let Some(category) = self.category {
            validate.category = category;
        }
        if let Some(language) = self.language {
            validate.language = language;
        }
        if let Some(limit) = self.limit {
            validate.recent_limit = limit;
        }
        if let Some(path) = self.repo_inventory {
            validate.repo_inventory_path = Some(path);
        }
        (self.path, validate)
    }
}

pub fn run(args: ValidateArgs, config: &Config, output: &Output) -> Result<()> {
    let (path, settings) = args.apply(config.validate.clone());
    let path = path.unwrap_or_else(|| config.scan.output_path.clone());

    output.verbose_ctx("validate", &format!("Reading {}", path.display()));
    let file = InventoryFile::new(path);
    let document = file.read()?;

    let in_category = document.by_category(settings.category);
    let with_language = document.with_language(&settings.language);
    let recent = document.most_recent(settings.recent_limit);
    let table = document.table(settings.table_limit);

    let repo_count = match settings.repo_inventory_path.as_deref() {
        Some(repo_path) => match RepoInventory::read_optional(repo_path) {
            Ok(inventory) => inventory.map(|i| i.repository_count()),
            Err(e) => {
                output.warn(&e.to_string());
                None
            }
        },
        None => None,
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "valid": true,
            "path": file.path().display().to_string(),
            "scan_timestamp": document.scan_timestamp,
            "base_path": document.base_path,
            "statistics": document.statistics,
            "category": {
                "name": settings.category.label(),
                "count": in_category.len(),
            },
            "language": {
                "name": settings.language,
                "count": with_language.len(),
            },
            "most_recent": recent.iter().map(|r| recent_entry(r)).collect::<Vec<_>>(),
            "table": table,
            "repository_inventory_count": repo_count,
        }));
        return Ok(());
    }

    output.line(&format!("Inventory: {}", file.path().display()));
    output.line(&format!("Scanned:   {} at {}", document.base_path, document.scan_timestamp));
    output.line(&format!(
        "Files:     {} in {} repositories",
        document.statistics.total_files, document.statistics.repositories_found
    ));
    if let Some(count) = repo_count {
        output.line(&format!("Repository inventory: {} repositories", count));
    }

    output.blank();
    output.line(&format!(
        "Category '{}': {} files",
        settings.category,
        in_category.len()
    ));
    output.line(&format!(
        "Language '{}': {} files",
        settings.language,
        with_language.len()
    ));

    output.blank();
    output.line(&format!("Most recent ({}):", recent.len()));
    for record in &recent {
        output.line(&format!(
            "  {:<24} {:<30} {}",
            record.last_modified_iso.as_deref().unwrap_or("-"),
            record.repo_name,
            record.relative_path
        ));
    }

    output.blank();
    output.line(&format!(
        "{:<24} {:<30} {:<22} {:<24} LANGUAGES",
        "MODIFIED", "REPOSITORY", "CATEGORY", "FILE"
    ));
    output.line(&"-".repeat(110));
    for row in &table {
        output.line(&format!(
            "{:<24} {:<30} {:<22} {:<24} {}",
            row.modified, row.repo, row.category, row.file, row.languages
        ));
    }

    output.blank();
    output.success("Inventory is valid");

    Ok(())
}

fn recent_entry(record: &DocRecord) -> serde_json::Value {
    serde_json::json!({
        "repo_name": record.repo_name,
        "relative_path": record.relative_path,
        "last_modified": record.last_modified,
        "last_modified_iso": record.last_modified_iso,
    })
}
