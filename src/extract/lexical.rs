// src/extract/lexical.rs
//! Coarse identifier tokenizer used when the structural stage finds
//! definitions but no references.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::lang::Lang;
use crate::types::Tag;

static IDENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Emits one reference tag per identifier token, skipping `lang` keywords.
/// Positions are not tracked, so every tag carries an unknown line.
#[must_use]
pub fn references(lang: Lang, rel_path: &Path, abs_path: &Path, content: &str) -> Vec<Tag> {
    IDENT_RE
        .find_iter(content)
        .map(|m| m.as_str())
        .filter(|word| !lang.is_keyword(word))
        .map(|word| Tag::reference(rel_path, abs_path, None, word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_keywords_and_numbers() {
        let tags = references(
            Lang::TypeScript,
            Path::new("app.ts"),
            Path::new("/src/app.ts"),
            "const total = sum(items, 42);",
        );
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["total", "sum", "items"]);
        assert!(tags.iter().all(|t| t.is_ref() && t.line.is_none()));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let tags = references(Lang::Python, Path::new("a.py"), Path::new("a.py"), "x = x + x");
        assert_eq!(tags.len(), 3);
    }
}
