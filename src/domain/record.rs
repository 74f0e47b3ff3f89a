//! Documentation record domain model
//!
//! A record is one qualifying documentation file together with the metadata
//! derived from its repository. Records are built once by the extractor and
//! never modified afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language recorded when no marker file matches
pub const DEFAULT_LANGUAGE: &str = "Markdown";

#[derive(Debug, Error)]
#[error("Unknown category: {0}")]
pub struct CategoryParseError(String);

/// Repository category, derived from the directory that groups repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[serde(rename = "Monorepo")]
    Monorepo,
    #[serde(rename = "Rust Component")]
    RustComponent,
    #[serde(rename = "TypeScript Component")]
    TypeScriptComponent,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Returns the display label (also the serialized form)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Monorepo => "Monorepo",
            Category::RustComponent => "Rust Component",
            Category::TypeScriptComponent => "TypeScript Component",
            Category::Other => "Other",
        }
    }

    /// Maps a grouping directory name to a category.
    ///
    /// Unrecognized names map to [`Category::Other`].
    pub fn from_group_dir(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "monorepo" | "monorepos" => Category::Monorepo,
            "rust component repos" | "rust components" | "rust" => Category::RustComponent,
            "typescript component repos" | "typescript components" | "typescript" => {
                Category::TypeScriptComponent
            }
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parses a display label, ignoring case and separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "monorepo" => Ok(Category::Monorepo),
            "rustcomponent" | "rust" => Ok(Category::RustComponent),
            "typescriptcomponent" | "typescript" => Ok(Category::TypeScriptComponent),
            "other" => Ok(Category::Other),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Metadata for one documentation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Absolute path of the file
    pub path: String,

    /// Repository root the file belongs to
    pub repo_path: String,

    /// Final component of the repository root
    pub repo_name: String,

    pub category: Category,

    /// Detected languages, never empty
    pub languages: Vec<String>,

    /// Last modification as Unix seconds
    pub last_modified: Option<i64>,

    /// `last_modified` rendered as an RFC 3339 UTC timestamp
    pub last_modified_iso: Option<String>,

    pub filename: String,

    /// Path relative to the repository root, `/`-separated
    pub relative_path: String,
}

impl DocRecord {
    /// Returns true if the record lists the given language
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Orders records by repository name, then filename
    pub fn sort_order(&self, other: &Self) -> Ordering {
        compare_names(&self.repo_name, &other.repo_name)
            .then_with(|| compare_names(&self.filename, &other.filename))
    }
}

/// Case-insensitive name comparison; names differing only in case put
/// lowercase first (`alpha` < `Alpha`), as locale collation does.
///
/// This is a total order, so sorting with it is deterministic.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        // Reversed byte order: at the first case difference, lowercase wins
        .then_with(|| b.cmp(a))
}

/// Renders Unix seconds as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn iso_timestamp(secs: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
