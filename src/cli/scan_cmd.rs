//! `docinv scan` - build the documentation inventory

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::output::Output;
use crate::scan::{GitHistory, HistoryLookup, NoHistory, ScanEvent, Scanner};
use crate::storage::{Config, InventoryFile, ScanConfig};

#[derive(Debug, Default, Args)]
pub struct ScanArgs {
    /// Directory to scan (defaults to the configured base path)
    pub root: Option<PathBuf>,

    /// Where to write the inventory JSON
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Use filesystem modification times only, skipping git history
    #[arg(long)]
    pub no_git: bool,

    /// Also write a YAML copy of the inventory
    #[arg(long)]
    pub yaml: bool,
}

impl ScanArgs {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply(self, mut scan: ScanConfig) -> ScanConfig {
        if let Some(root) = self.root {
            scan.base_path = root;
        }
        if let Some(output) = self.output {
            scan.output_path = output;
        }
        if self.no_git {
            scan.use_git_history = false;
        }
        if self.yaml {
            scan.write_yaml = true;
        }
        scan
    }
}

pub fn run(args: ScanArgs, config: &Config, output: &Output) -> Result<()> {
    let scan = args.apply(config.scan.clone());

    let history: Box<dyn HistoryLookup> = if scan.use_git_history {
        output.verbose_ctx(
            "scan",
            &format!("History lookups via {}", scan.git_program.display()),
        );
        Box::new(GitHistory::new(&scan.git_program))
    } else {
        output.verbose_ctx("scan", "History lookups disabled, using mtime");
        Box::new(NoHistory)
    };

    output.line(&format!("Scanning {} ...", scan.base_path.display()));

    let outcome = Scanner::new(&scan, history.as_ref()).run_with(|event| match event {
        ScanEvent::Found(record) => {
            output.verbose_ctx("scan", &format!("{} / {}", record.repo_name, record.relative_path))
        }
        ScanEvent::Skipped(notice) => output.warn(&notice.to_string()),
    })?;

    output.verbose_ctx("scan", &format!("Visited {} files", outcome.visited));

    let file = InventoryFile::new(&scan.output_path);
    file.write(&outcome.document)
        .with_context(|| format!("Failed to write inventory to {}", file.path().display()))?;

    let yaml_path = if scan.write_yaml {
        Some(file.write_yaml(&outcome.document)?)
    } else {
        None
    };

    let stats = &outcome.document.statistics;

    if output.is_json() {
        output.data(&serde_json::json!({
            "output": file.path().display().to_string(),
            "yaml_output": yaml_path.as_ref().map(|p| p.display().to_string()),
            "base_path": outcome.document.base_path,
            "visited": outcome.visited,
            "skipped": outcome.skipped.len(),
            "statistics": stats,
        }));
        return Ok(());
    }

    output.blank();
    output.heading("Documentation Inventory");
    output.field("Files found:", stats.total_files);
    output.field("Repositories found:", stats.repositories_found);
    if !outcome.skipped.is_empty() {
        output.field("Skipped:", outcome.skipped.len());
    }
    output.counts("By category", &stats.by_category);
    output.counts("By language", &stats.by_language);

    output.blank();
    output.success(&format!("Inventory written to {}", file.path().display()));
    if let Some(path) = yaml_path {
        output.success(&format!("YAML inventory written to {}", path.display()));
    }

    Ok(())
}
