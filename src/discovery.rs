// src/discovery.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{should_prune, Config};
use crate::error::Result;
use crate::lang::Lang;
use crate::types::SourceFile;

/// Runs the file discovery pipeline over files and directories.
///
/// Directories are walked recursively; only files with a supported language
/// extension that no exclude pattern matches are kept. The result is sorted
/// by relative path and free of duplicates.
///
/// # Errors
/// Currently infallible; walk errors are counted and logged.
pub fn discover(paths: &[PathBuf], config: &Config) -> Result<Vec<SourceFile>> {
    let cwd = std::env::current_dir().ok().map(|d| absolute(&d));
    let mut found: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();

    for path in paths {
        let (root, files) = if path.is_dir() {
            (absolute(path), walk_filesystem(path))
        } else if path.is_file() {
            (absolute(&parent_dir(path)), vec![path.clone()])
        } else {
            tracing::warn!(path = %path.display(), "path not found, skipping");
            continue;
        };

        for file in files {
            let abs_path = absolute(&file);
            let rel_path = relative(&abs_path, &file, [cwd.as_deref(), Some(root.as_path())]);
            if Lang::from_path(&rel_path).is_none() || config.is_excluded(&rel_path) {
                continue;
            }
            found.entry(rel_path).or_insert(abs_path);
        }
    }

    Ok(found
        .into_iter()
        .map(|(rel_path, abs_path)| SourceFile { rel_path, abs_path })
        .collect())
}

fn walk_filesystem(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        tracing::warn!("Encountered {error_count} errors during file walk");
    }
    paths
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

/// Path of `abs_path` below the first base that contains it: the working
/// directory, then the root the file was found under. Falls back to the path as
/// given, minus a leading `./`.
fn relative(abs_path: &Path, given: &Path, bases: [Option<&Path>; 2]) -> PathBuf {
    bases
        .into_iter()
        .flatten()
        .find_map(|base| {
            abs_path
                .strip_prefix(base)
                .ok()
                .filter(|rel| !rel.as_os_str().is_empty())
        })
        .unwrap_or_else(|| given.strip_prefix(".").unwrap_or(given))
        .to_path_buf()
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
