use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repomap",
    version,
    about = "Token-bounded map of a codebase's most relevant definitions"
)]
pub struct Cli {
    /// Source files or directories to analyze (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Files actively being edited (prioritized)
    #[arg(long, num_args = 0.., value_name = "FILE")]
    pub chat_files: Vec<PathBuf>,
    /// Identifier substrings to prioritize
    #[arg(long, num_args = 0.., value_name = "IDENT")]
    pub mention: Vec<String>,
    /// Maximum tokens for output (overrides repomap.toml)
    #[arg(long, allow_negative_numbers = true)]
    pub max_tokens: Option<i64>,
    /// Extraction worker threads, 0 for automatic (overrides repomap.toml)
    #[arg(long)]
    pub threads: Option<usize>,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
