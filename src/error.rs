// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoMapError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid token budget {0}: max tokens must not be negative")]
    InvalidBudget(i64),

    #[error("tree-sitter rejected the {lang} grammar: {detail}")]
    Grammar { lang: &'static str, detail: String },

    #[error("tree-sitter query error for {lang}: {detail}")]
    Query { lang: &'static str, detail: String },

    #[error("failed to parse {0}")]
    Parse(PathBuf),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("invalid repomap.toml: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to start extraction pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, RepoMapError>;

impl RepoMapError {
    /// Wraps an I/O error together with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}
