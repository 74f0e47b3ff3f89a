//! Language detection by marker-file presence
//!
//! Only the repository root's direct children are inspected. A single marker
//! is enough to record a language; this is a presence check, not a measure of
//! how much of the repository is written in it.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::domain::DEFAULT_LANGUAGE;

/// Evidence that a language is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A file with exactly this name directly under the root
    File(&'static str),
    /// Any direct child file with this extension
    Extension(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageRule {
    pub name: &'static str,
    pub markers: &'static [Marker],
}

/// Detection table, in reporting order
pub const LANGUAGE_RULES: &[LanguageRule] = &[
    LanguageRule {
        name: "Rust",
        markers: &[Marker::File("Cargo.toml"), Marker::Extension("rs")],
    },
    LanguageRule {
        name: "TypeScript",
        markers: &[
            Marker::File("tsconfig.json"),
            Marker::Extension("ts"),
            Marker::Extension("tsx"),
        ],
    },
    LanguageRule {
        name: "JavaScript",
        markers: &[
            Marker::File("package.json"),
            Marker::Extension("js"),
            Marker::Extension("mjs"),
        ],
    },
    LanguageRule {
        name: "Python",
        markers: &[
            Marker::File("pyproject.toml"),
            Marker::File("setup.py"),
            Marker::File("requirements.txt"),
            Marker::Extension("py"),
        ],
    },
    LanguageRule {
        name: "Go",
        markers: &[Marker::File("go.mod"), Marker::Extension("go")],
    },
    LanguageRule {
        name: "Java",
        markers: &[
            Marker::File("pom.xml"),
            Marker::File("build.gradle"),
            Marker::Extension("java"),
        ],
    },
    LanguageRule {
        name: "Ruby",
        markers: &[Marker::File("Gemfile"), Marker::Extension("rb")],
    },
    LanguageRule {
        name: "Shell",
        markers: &[Marker::Extension("sh")],
    },
];

/// Languages that always bring a companion along
const COMPANIONS: &[(&str, &str)] = &[("TypeScript", "JavaScript")];

/// Detects the languages used at `root`.
///
/// Returns `["Markdown"]` when no marker matches. Fails only if the root
/// cannot be listed.
pub fn detect_languages(root: &Path) -> io::Result<Vec<String>> {
    let mut files = HashSet::new();
    let mut extensions = HashSet::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            extensions.insert(ext.to_string());
        }
        if let Some(name) = entry.file_name().to_str() {
            files.insert(name.to_string());
        }
    }

    let mut languages: Vec<String> = LANGUAGE_RULES
        .iter()
        .filter(|rule| {
            rule.markers.iter().any(|marker| match marker {
                Marker::File(name) => files.contains(*name),
                Marker::Extension(ext) => extensions.contains(*ext),
            })
        })
        .map(|rule| rule.name.to_string())
        .collect();

    for (language, companion) in COMPANIONS {
        let has_language = languages.iter().any(|l| l == language);
        let has_companion = languages.iter().any(|l| l == companion);
        if has_language && !has_companion {
            languages.push(companion.to_string());
        }
    }

    if languages.is_empty() {
        languages.push(DEFAULT_LANGUAGE.to_string());
    }

    Ok(languages)
}
