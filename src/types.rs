// src/types.rs
//! Core data records shared by extraction, ranking and rendering.

use std::path::{Path, PathBuf};

/// Whether a tag introduces a symbol or uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKind {
    Definition,
    Reference,
}

/// One observed symbol occurrence.
///
/// `line` is 0-based; `None` marks occurrences whose position is unknown
/// (tags produced by the lexical fallback).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub rel_path: PathBuf,
    pub abs_path: PathBuf,
    pub line: Option<usize>,
    pub name: String,
    pub kind: TagKind,
}

impl Tag {
    #[must_use]
    pub fn definition(rel_path: &Path, abs_path: &Path, line: usize, name: &str) -> Self {
        Self {
            rel_path: rel_path.to_path_buf(),
            abs_path: abs_path.to_path_buf(),
            line: Some(line),
            name: name.to_string(),
            kind: TagKind::Definition,
        }
    }

    #[must_use]
    pub fn reference(rel_path: &Path, abs_path: &Path, line: Option<usize>, name: &str) -> Self {
        Self {
            rel_path: rel_path.to_path_buf(),
            abs_path: abs_path.to_path_buf(),
            line,
            name: name.to_string(),
            kind: TagKind::Reference,
        }
    }

    #[must_use]
    pub fn is_def(&self) -> bool {
        self.kind == TagKind::Definition
    }

    #[must_use]
    pub fn is_ref(&self) -> bool {
        self.kind == TagKind::Reference
    }
}

/// A discovered source file: the path used for display and ranking, and the
/// canonical path used for reading and caching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceFile {
    pub rel_path: PathBuf,
    pub abs_path: PathBuf,
}
