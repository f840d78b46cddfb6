use std::path::Path;

use tree_sitter::Language;

use crate::lang_queries::{KEYWORDS, TAG_QUERIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Rust,
    Python,
    TypeScript,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Self::Rust),
            "py" => Some(Self::Python),
            "ts" | "tsx" | "js" | "jsx" => Some(Self::TypeScript),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(|ext| Self::from_ext(&ext.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Rust => tree_sitter_rust::language(),
            Self::Python => tree_sitter_python::language(),
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
        }
    }

    // Indexing is safe: the enum discriminant is bounded by the table length.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn q_tags(self) -> &'static str {
        TAG_QUERIES[self as usize]
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS[self as usize]
    }

    #[must_use]
    pub fn is_keyword(self, word: &str) -> bool {
        self.keywords().contains(&word)
    }
}
