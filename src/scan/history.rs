//! Last-commit timestamps from version-control history

use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of last-modified times from history
pub trait HistoryLookup {
    /// Unix seconds of the most recent commit touching `file`, if known
    fn last_commit_time(&self, file: &Path) -> Option<i64>;
}

/// Queries `git log` once per file
#[derive(Debug, Clone)]
pub struct GitHistory {
    program: PathBuf,
}

impl GitHistory {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitHistory {
    fn default() -> Self {
        Self::new("git")
    }
}

impl HistoryLookup for GitHistory {
    fn last_commit_time(&self, file: &Path) -> Option<i64> {
        let dir = file.parent()?;
        let name = file.file_name()?;

        let output = Command::new(&self.program)
            .args(["log", "-1", "--format=%ct", "--"])
            .arg(name)
            .current_dir(dir)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        // Untracked files produce empty output
        parse_timestamp(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Never consults history; callers fall back to filesystem times
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryLookup for NoHistory {
    fn last_commit_time(&self, _file: &Path) -> Option<i64> {
        None
    }
}

fn parse_timestamp(stdout: &str) -> Option<i64> {
    stdout.trim().parse().ok()
}
