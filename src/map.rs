// src/map.rs
//! Repository map generation: ranking plus budgeted rendering.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::cache::TagCache;
use crate::config::Config;
use crate::discovery;
use crate::error::{RepoMapError, Result};
use crate::extract::{pool, TwoStageExtractor};
use crate::graph::rank::{DefinitionIndex, GraphEngine, RankedScores};
use crate::tokens::Tokenizer;
use crate::types::{SourceFile, Tag};

/// What to map and what to focus on.
#[derive(Debug, Clone, Default)]
pub struct MapRequest {
    pub paths: Vec<PathBuf>,
    /// Files currently being edited.
    pub chat_files: Vec<PathBuf>,
    pub mentioned: HashSet<String>,
    pub max_tokens: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    NoSources,
    NoSymbols,
    Context(String),
}

/// Discovers, extracts, ranks and renders.
///
/// # Errors
/// Returns an error for a negative budget or if the extraction pool cannot start.
pub fn generate(request: &MapRequest, config: &Config) -> Result<MapOutcome> {
    if request.max_tokens < 0 {
        return Err(RepoMapError::InvalidBudget(request.max_tokens));
    }

    tracing::info!("Scanning files...");
    let sources = discovery::discover(&request.paths, config)?;
    if sources.is_empty() {
        return Ok(MapOutcome::NoSources);
    }

    let cache = TagCache::new();
    let extractor = TwoStageExtractor::new(config.lexical_fallback);
    let tags = pool::extract_all(&sources, &extractor, &cache, config.threads)?;
    tracing::debug!(
        files = sources.len(),
        tags = tags.len(),
        cached = cache.len(),
        "extracted tags"
    );
    if tags.is_empty() {
        return Ok(MapOutcome::NoSymbols);
    }

    let active = resolve_active(&request.chat_files, &sources, config)?;
    let context = build_context(&tags, &active, &request.mentioned, request.max_tokens)?;
    tracing::debug!(
        estimate = Tokenizer::estimate(&context),
        cl100k = Tokenizer::count(&context),
        "rendered context"
    );
    Ok(MapOutcome::Context(context))
}

/// Maps chat file arguments onto the relative paths used by the tags.
fn resolve_active(
    chat_files: &[PathBuf],
    sources: &[SourceFile],
    config: &Config,
) -> Result<HashSet<PathBuf>> {
    if chat_files.is_empty() {
        return Ok(HashSet::new());
    }
    let chat: HashSet<PathBuf> = discovery::discover(chat_files, config)?
        .into_iter()
        .map(|f| f.abs_path)
        .collect();

    Ok(sources
        .iter()
        .filter(|s| chat.contains(&s.abs_path))
        .map(|s| s.rel_path.clone())
        .collect())
}

/// Ranks the tags and renders the highest-ranked definitions within
/// `max_tokens`.
///
/// # Errors
/// Returns `InvalidBudget` if `max_tokens` is negative.
#[allow(clippy::implicit_hasher)]
pub fn build_context(
    tags: &[Tag],
    active: &HashSet<PathBuf>,
    mentioned: &HashSet<String>,
    max_tokens: i64,
) -> Result<String> {
    let budget =
        usize::try_from(max_tokens).map_err(|_| RepoMapError::InvalidBudget(max_tokens))?;
    let ranking = GraphEngine::rank(tags, active, mentioned);
    Ok(format_context(&ranking.scores, &ranking.data.definitions, tags, budget))
}

/// Lists each file's definitions, best-ranked file first.
///
/// Once a block pushes the estimate past `max_tokens`, trailing lines are
/// dropped until it fits and no further files are considered. The output may
/// be empty.
#[must_use]
pub fn format_context(
    scores: &RankedScores,
    definitions: &DefinitionIndex,
    tags: &[Tag],
    max_tokens: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    for file in files_by_rank(scores, tags) {
        let defs = definitions.for_file(file);
        if defs.is_empty() {
            continue;
        }

        lines.push(format!("\n{}:", file.display()));
        for tag in defs {
            lines.push(format!("  line {}: def {}", tag.line.map_or(0, |l| l + 1), tag.name));
        }

        if Tokenizer::exceeds_limit(&lines.join("\n"), max_tokens) {
            while !lines.is_empty()
                && Tokenizer::exceeds_limit(&lines.join("\n"), max_tokens)
            {
                lines.pop();
            }
            break;
        }
    }

    lines.join("\n")
}

/// Distinct tagged files by descending score; ties keep path order.
fn files_by_rank<'a>(scores: &RankedScores, tags: &'a [Tag]) -> Vec<&'a Path> {
    let files: BTreeSet<&Path> = tags.iter().map(|t| t.rel_path.as_path()).collect();
    let mut ranked: Vec<(&Path, f64)> = files
        .into_iter()
        .map(|f| (f, scores.get(f).copied().unwrap_or(0.0)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(f, _)| f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_by_rank_breaks_ties_by_path() {
        let tags = vec![
            Tag::definition(Path::new("b.py"), Path::new("b.py"), 0, "b"),
            Tag::definition(Path::new("a.py"), Path::new("a.py"), 0, "a"),
            Tag::definition(Path::new("c.py"), Path::new("c.py"), 0, "c"),
        ];
        let scores: RankedScores = [
            (PathBuf::from("a.py"), 0.25),
            (PathBuf::from("b.py"), 0.25),
            (PathBuf::from("c.py"), 0.5),
        ]
        .into_iter()
        .collect();

        let order = files_by_rank(&scores, &tags);
        assert_eq!(order, vec![Path::new("c.py"), Path::new("a.py"), Path::new("b.py")]);
    }
}
