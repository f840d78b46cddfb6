use serde::{Deserialize, Serialize};

/// On-disk shape of `repomap.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMapToml {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i64,
    /// Extraction worker count; 0 lets the pool size itself.
    #[serde(default)]
    pub threads: usize,
    /// Regexes matched against forward-slash relative paths.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub mentioned: Vec<String>,
    #[serde(default = "default_true")]
    pub lexical_fallback: bool,
}

impl Default for RepoMapToml {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            threads: 0,
            exclude: Vec::new(),
            mentioned: Vec::new(),
            lexical_fallback: true,
        }
    }
}

pub const fn default_max_tokens() -> i64 {
    1024
}

const fn default_true() -> bool {
    true
}
