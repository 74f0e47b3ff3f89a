//! Terminal output for `docinv`
//!
//! Results go to stdout. Warnings (skipped files, unreadable companion
//! inventories) and `--verbose` diagnostics go to stderr, so
//! `--format json` stdout is always a single parseable document.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

/// Column where summary values start (`Files found:        3`)
const FIELD_WIDTH: usize = 20;

/// Column where per-category and per-language counts start
const COUNT_WIDTH: usize = 22;

/// Width of the rule under a summary heading
const RULE_WIDTH: usize = 40;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Writes command results and diagnostics in the selected format
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Final status line of a command
    pub fn success(&self, message: &str) {
        if self.is_json() {
            println!("{}", serde_json::json!({ "success": true, "message": message }));
        } else {
            println!("{}", message);
        }
    }

    /// Non-fatal problem; the command carries on
    pub fn warn(&self, message: &str) {
        if self.is_json() {
            eprintln!("{}", serde_json::json!({ "warning": message }));
        } else {
            eprintln!("Warning: {}", message);
        }
    }

    /// Machine-readable result: compact in JSON mode, pretty in text mode
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = if self.is_json() {
            serde_json::to_string(data)
        } else {
            serde_json::to_string_pretty(data)
        };
        if let Ok(json) = rendered {
            println!("{}", json);
        }
    }

    /// Text-mode line; dropped in JSON mode
    pub fn line(&self, message: &str) {
        if !self.is_json() {
            println!("{}", message);
        }
    }

    pub fn blank(&self) {
        self.line("");
    }

    /// Title underlined with `=`
    pub fn heading(&self, title: &str) {
        self.line(title);
        self.line(&rule('=', RULE_WIDTH));
    }

    /// `label` padded so values line up in a summary block
    pub fn field(&self, label: &str, value: impl Display) {
        self.line(&format_field(label, value));
    }

    /// Indented `name count` rows under `title`; nothing when `counts` is empty
    pub fn counts(&self, title: &str, counts: &BTreeMap<String, usize>) {
        if counts.is_empty() {
            return;
        }
        self.blank();
        self.line(&format!("{}:", title));
        for (name, count) in counts {
            self.line(&format_count(name, *count));
        }
    }

    /// `[verbose:<context>]` diagnostic on stderr, only with `--verbose`
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

fn format_field(label: &str, value: impl Display) -> String {
    format!("{:<width$}{}", label, value, width = FIELD_WIDTH)
}

fn format_count(name: &str, count: usize) -> String {
    format!("  {:<width$} {}", name, count, width = COUNT_WIDTH)
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}
