// tests/cli_map.rs
//! End-to-end map generation over temporary source trees.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use repomap_core::config::Config;
use repomap_core::error::RepoMapError;
use repomap_core::map::{self, MapOutcome, MapRequest};
use tempfile::tempdir;

fn write_project(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("pkg"))?;
    fs::create_dir_all(root.join("node_modules/dep"))?;
    fs::write(
        root.join("pkg/core.py"),
        "class Engine:\n    def run(self):\n        pass\n",
    )?;
    fs::write(
        root.join("pkg/app.py"),
        "from pkg.core import Engine\n\ndef main():\n    Engine().run()\n",
    )?;
    fs::write(root.join("pkg/util.py"), "def helper():\n    pass\n")?;
    fs::write(root.join("node_modules/dep/index.py"), "def vendored():\n    pass\n")?;
    fs::write(root.join("README.md"), "# not code\n")?;
    Ok(())
}

fn request(paths: Vec<PathBuf>, chat_files: Vec<PathBuf>, max_tokens: i64) -> MapRequest {
    MapRequest {
        paths,
        chat_files,
        mentioned: HashSet::new(),
        max_tokens,
    }
}

fn context(outcome: MapOutcome) -> String {
    match outcome {
        MapOutcome::Context(text) => text,
        other => panic!("expected context, got {other:?}"),
    }
}

#[test]
fn test_map_basic() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path())?;

    let out = context(map::generate(
        &request(vec![temp.path().to_path_buf()], Vec::new(), 1024),
        &Config::new(),
    )?);

    assert!(out.contains("core.py:"));
    assert!(out.contains("def Engine"));
    assert!(out.contains("util.py:"));
    assert!(!out.contains("README"));
    assert!(!out.contains("vendored"), "pruned directories are skipped");
    Ok(())
}

#[test]
fn test_map_chat_file_focus() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path())?;

    let out = context(map::generate(
        &request(
            vec![temp.path().to_path_buf()],
            vec![temp.path().join("pkg/app.py")],
            1024,
        ),
        &Config::new(),
    )?);

    let core = out.find("core.py:").unwrap();
    let util = out.find("util.py:").unwrap();
    assert!(core < util, "definitions used by the chat file come first:\n{out}");
    Ok(())
}

#[test]
fn test_map_is_repeatable() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path())?;
    let req = request(vec![temp.path().to_path_buf()], Vec::new(), 6);

    let first = map::generate(&req, &Config::new())?;
    let second = map::generate(&req, &Config::new())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_map_respects_excludes() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path())?;
    let config = Config::parse_toml("exclude = [\"util\\\\.py$\"]")?;

    let out = context(map::generate(
        &request(vec![temp.path().to_path_buf()], Vec::new(), 1024),
        &config,
    )?);
    assert!(!out.contains("util.py"));
    Ok(())
}

#[test]
fn test_map_no_sources() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("notes.txt"), "hello")?;

    let outcome = map::generate(
        &request(vec![temp.path().to_path_buf()], Vec::new(), 1024),
        &Config::new(),
    )?;
    assert_eq!(outcome, MapOutcome::NoSources);
    Ok(())
}

#[test]
fn test_map_no_symbols() -> Result<()> {
    let temp = tempdir()?;
    fs::write(temp.path().join("empty.py"), "# nothing here\n")?;

    let outcome = map::generate(
        &request(vec![temp.path().to_path_buf()], Vec::new(), 1024),
        &Config::new(),
    )?;
    assert_eq!(outcome, MapOutcome::NoSymbols);
    Ok(())
}

#[test]
fn test_map_rejects_negative_budget() {
    let err = map::generate(&request(vec![PathBuf::from(".")], Vec::new(), -10), &Config::new())
        .unwrap_err();
    assert!(matches!(err, RepoMapError::InvalidBudget(-10)));
}

#[test]
fn test_map_paths_are_relative_to_the_walked_root() -> Result<()> {
    let temp = tempdir()?;
    write_project(temp.path())?;
    let root = fs::canonicalize(temp.path())?;
    let dir_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let plain = context(map::generate(
        &request(vec![root.clone()], Vec::new(), 1024),
        &Config::new(),
    )?);
    assert!(plain.contains("\npkg/core.py:"), "headers should be relative:\n{plain}");
    assert!(!plain.contains(&dir_name));

    // The root's own name is not part of any relative path, so it focuses nothing.
    let mut mentioned = request(vec![root], Vec::new(), 1024);
    mentioned.mentioned.insert(dir_name);
    let focused = context(map::generate(&mentioned, &Config::new())?);
    assert_eq!(plain, focused);
    Ok(())
}
