//! Recursive directory walker
//!
//! Yields every regular file below a root, depth first, pruning
//! version-control metadata directories. Unreadable directories are reported
//! as errors in the stream and the walk carries on past them.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
#[error("Cannot read {}: {source}", .path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

impl From<walkdir::Error> for WalkError {
    fn from(source: walkdir::Error) -> Self {
        let path = source.path().map(Path::to_path_buf).unwrap_or_default();
        Self { path, source }
    }
}

/// Lazily walks `root`, skipping any directory named in `skip_dirs`.
///
/// Entry order follows the platform's directory enumeration and is not
/// stable; sort downstream when determinism matters.
pub fn walk<'a>(
    root: &Path,
    skip_dirs: &'a [String],
) -> impl Iterator<Item = Result<PathBuf, WalkError>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| !is_skipped_dir(entry, skip_dirs))
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(WalkError::from(e))),
        })
}

fn is_skipped_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    // Never prune the root itself
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| skip_dirs.iter().any(|s| s == name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn skip() -> Vec<String> {
        vec![".git".to_string()]
    }

    #[test]
    fn walks_nested_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.md"), "x").unwrap();
        fs::write(dir.path().join("a/b/deep.md"), "x").unwrap();

        let skip = skip();
        let mut files: Vec<PathBuf> = walk(dir.path(), &skip).map(|r| r.unwrap()).collect();
        files.sort();

        assert_eq!(
            files,
            vec![dir.path().join("a/b/deep.md"), dir.path().join("top.md")]
        );
    }

    #[test]
    fn skips_git_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("repo/.git/refs")).unwrap();
        fs::write(dir.path().join("repo/.git/HEAD"), "ref").unwrap();
        fs::write(dir.path().join("repo/.git/refs/README.md"), "x").unwrap();
        fs::write(dir.path().join("repo/README.md"), "x").unwrap();

        let skip = skip();
        let files: Vec<PathBuf> = walk(dir.path(), &skip).map(|r| r.unwrap()).collect();

        assert_eq!(files, vec![dir.path().join("repo/README.md")]);
    }

    #[test]
    fn missing_root_yields_error() {
        let dir = TempDir::new().unwrap();
        let skip = skip();
        let results: Vec<_> = walk(&dir.path().join("nope"), &skip).collect();

        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_reported_and_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("README.md"), "x").unwrap();
        fs::write(dir.path().join("README.md"), "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root can read anything; nothing to assert in that case
        let readable = fs::read_dir(&locked).is_ok();

        let skip = skip();
        let results: Vec<_> = walk(dir.path(), &skip).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if !readable {
            let files: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
            let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
            assert_eq!(files, vec![&dir.path().join("README.md")]);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, locked);
        }
    }
}
