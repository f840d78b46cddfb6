// tests/unit_config.rs
use std::fs;

use repomap_core::config::Config;
use repomap_core::error::RepoMapError;

#[test]
fn test_defaults() {
    let c = Config::default();
    assert_eq!(c.max_tokens, 1024);
    assert_eq!(c.threads, 0);
    assert!(c.exclude_patterns.is_empty());
    assert!(c.lexical_fallback);
}

#[test]
fn test_parse_toml() {
    let c = Config::parse_toml(
        "max_tokens = 256\nthreads = 3\nexclude = [\"^vendor/\"]\nmentioned = [\"Graph\"]\nlexical_fallback = false",
    )
    .unwrap();
    assert_eq!(c.max_tokens, 256);
    assert_eq!(c.threads, 3);
    assert_eq!(c.mentioned, vec!["Graph".to_string()]);
    assert!(!c.lexical_fallback);
    assert!(c.is_excluded(std::path::Path::new("vendor/lib.py")));
    assert!(!c.is_excluded(std::path::Path::new("src/vendor.py")));
}

#[test]
fn test_missing_file_uses_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert_eq!(c.max_tokens, 1024);
}

#[test]
fn test_load_from_dir() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("repomap.toml"), "max_tokens = 77").unwrap();
    let c = Config::load_from(d.path()).unwrap();
    assert_eq!(c.max_tokens, 77);
}

#[test]
fn test_invalid_regex_is_reported() {
    let err = Config::parse_toml("exclude = [\"(unclosed\"]").unwrap_err();
    assert!(matches!(err, RepoMapError::Regex(_)));
}

#[test]
fn test_malformed_toml_is_reported() {
    let err = Config::parse_toml("max_tokens = \"lots\"").unwrap_err();
    assert!(matches!(err, RepoMapError::Config(_)));
}

#[test]
fn test_negative_budget_is_reported() {
    let err = Config::parse_toml("max_tokens = -3").unwrap_err();
    assert!(matches!(err, RepoMapError::InvalidBudget(-3)));
}
