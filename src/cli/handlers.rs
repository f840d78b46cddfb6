// src/cli/handlers.rs
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::Cli;
use crate::config::Config;
use crate::map::{self, MapOutcome, MapRequest};
use crate::tokens::Tokenizer;

/// Handles the map command: prints the ranked context to stdout.
///
/// # Errors
/// Returns error if configuration is invalid or the budget is negative.
pub fn handle_map(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }

    let request = build_request(cli, &config);
    match map::generate(&request, &config)? {
        MapOutcome::NoSources => println!("No source files found."),
        MapOutcome::NoSymbols => println!("No symbols found in the provided files."),
        MapOutcome::Context(context) => {
            let header = format!(
                "\n--- Repo Map Context (approx. {} tokens) ---",
                Tokenizer::estimate(&context)
            );
            println!("{}", header.bold());
            println!("{context}");
        }
    }
    Ok(())
}

fn build_request(cli: &Cli, config: &Config) -> MapRequest {
    let paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths.clone()
    };

    MapRequest {
        paths,
        chat_files: cli.chat_files.clone(),
        mentioned: config
            .mentioned
            .iter()
            .chain(&cli.mention)
            .cloned()
            .collect(),
        max_tokens: cli.max_tokens.unwrap_or(config.max_tokens),
    }
}
