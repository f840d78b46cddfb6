// src/config/mod.rs
pub mod types;

pub use self::types::RepoMapToml;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::error::{RepoMapError, Result};

pub const CONFIG_FILE: &str = "repomap.toml";

/// Directories never descended into during discovery.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    ".venv",
    "venv",
    ".tox",
    ".cache",
    "__pycache__",
    "coverage",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub max_tokens: i64,
    pub threads: usize,
    pub exclude_patterns: Vec<Regex>,
    pub mentioned: Vec<String>,
    pub lexical_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tokens: types::default_max_tokens(),
            threads: 0,
            exclude_patterns: Vec::new(),
            mentioned: Vec::new(),
            lexical_fallback: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `repomap.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Loads `repomap.toml` from `dir`; a missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or invalid.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(RepoMapError::io(e, path)),
        }
    }

    /// Parses configuration text.
    ///
    /// # Errors
    /// Returns error on malformed TOML, an invalid exclude regex or a negative budget.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let raw: RepoMapToml = toml::from_str(content)?;
        Self::from_toml(raw)
    }

    fn from_toml(raw: RepoMapToml) -> Result<Self> {
        let exclude_patterns = raw
            .exclude
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let config = Self {
            max_tokens: raw.max_tokens,
            threads: raw.threads,
            exclude_patterns,
            mentioned: raw.mentioned,
            lexical_fallback: raw.lexical_fallback,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the token budget is negative.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens < 0 {
            return Err(RepoMapError::InvalidBudget(self.max_tokens));
        }
        Ok(())
    }

    /// True if the forward-slash form of `path` matches an exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let s = path.to_string_lossy().replace('\\', "/");
        self.exclude_patterns.iter().any(|re| re.is_match(&s))
    }
}

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}
