// src/extract/mod.rs
//! Tag extraction: a structural tree-sitter stage with a lexical fallback,
//! plus the parallel driver that runs it over a file set.

pub mod lexical;
pub mod pool;
pub mod structural;

use std::path::Path;

use crate::error::Result;
use crate::lang::Lang;
use crate::types::Tag;

/// Produces the symbol occurrences of one file.
///
/// An `Err` is an isolated extraction failure: callers log it and treat the
/// file as contributing no tags.
pub trait TagExtractor: Send + Sync {
    /// # Errors
    /// Returns an error when the file cannot be parsed.
    fn extract(&self, rel_path: &Path, abs_path: &Path, content: &str) -> Result<Vec<Tag>>;
}

/// Structural extraction followed, when it found definitions but zero
/// references, by the lexical reference scan.
#[derive(Debug, Clone, Copy)]
pub struct TwoStageExtractor {
    lexical_fallback: bool,
}

impl TwoStageExtractor {
    #[must_use]
    pub fn new(lexical_fallback: bool) -> Self {
        Self { lexical_fallback }
    }
}

impl Default for TwoStageExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TagExtractor for TwoStageExtractor {
    fn extract(&self, rel_path: &Path, abs_path: &Path, content: &str) -> Result<Vec<Tag>> {
        let Some(lang) = Lang::from_path(rel_path) else {
            return Ok(Vec::new());
        };

        let structural::StructuralTags { mut defs, refs } =
            structural::extract(lang, rel_path, abs_path, content)?;

        if self.lexical_fallback && !defs.is_empty() && refs.is_empty() {
            tracing::debug!(
                path = %rel_path.display(),
                "no structural references, using lexical fallback"
            );
            defs.extend(lexical::references(lang, rel_path, abs_path, content));
        } else {
            defs.extend(refs);
        }

        Ok(defs)
    }
}
