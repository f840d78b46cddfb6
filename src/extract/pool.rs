// src/extract/pool.rs
//! Parallel extraction over a bounded rayon pool.

use std::fs;
use std::path::PathBuf;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use super::TagExtractor;
use crate::cache::TagCache;
use crate::error::{RepoMapError, Result};
use crate::types::{SourceFile, Tag};

/// Extracts tags from every file on a pool of `threads` workers
/// (0 lets rayon pick).
///
/// A file that cannot be read or parsed is logged and contributes no tags.
/// The result is ordered by relative path, independent of scheduling.
///
/// # Errors
/// Returns an error only if the thread pool cannot be built.
pub fn extract_all<E>(
    files: &[SourceFile],
    extractor: &E,
    cache: &TagCache,
    threads: usize,
) -> Result<Vec<Tag>>
where
    E: TagExtractor + ?Sized,
{
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;

    let mut per_file: Vec<(PathBuf, Vec<Tag>)> = pool.install(|| {
        files
            .par_iter()
            .map(|file| (file.rel_path.clone(), extract_one(file, extractor, cache)))
            .collect()
    });

    per_file.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(per_file.into_iter().flat_map(|(_, tags)| tags).collect())
}

fn extract_one<E>(file: &SourceFile, extractor: &E, cache: &TagCache) -> Vec<Tag>
where
    E: TagExtractor + ?Sized,
{
    match try_extract(file, extractor, cache) {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!(path = %file.rel_path.display(), error = %e, "skipping file");
            Vec::new()
        }
    }
}

fn try_extract<E>(file: &SourceFile, extractor: &E, cache: &TagCache) -> Result<Vec<Tag>>
where
    E: TagExtractor + ?Sized,
{
    let mtime = fs::metadata(&file.abs_path)
        .and_then(|m| m.modified())
        .map_err(|e| RepoMapError::io(e, &file.abs_path))?;

    cache.get_or_extract(&file.abs_path, mtime, || {
        let bytes = fs::read(&file.abs_path).map_err(|e| RepoMapError::io(e, &file.abs_path))?;
        let content = String::from_utf8_lossy(&bytes);
        extractor.extract(&file.rel_path, &file.abs_path, &content)
    })
}
