// src/graph/rank/personalization.rs
//! Personalization seed for the ranking walk.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Sparse `file -> weight`; absent files have zero seed weight.
pub type PersonalizationSeed = BTreeMap<PathBuf, f64>;

/// Nominal total seed mass split across all files.
pub const SEED_BUDGET: f64 = 100.0;

/// Seeds active files and files whose path contains a mentioned substring.
///
/// Each condition adds `SEED_BUDGET / |files|` on its own, so a file matching
/// both gets twice the base weight and the total may exceed `SEED_BUDGET`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::implicit_hasher)]
pub fn compute(
    files: &BTreeSet<PathBuf>,
    active: &HashSet<PathBuf>,
    mentioned: &HashSet<String>,
) -> PersonalizationSeed {
    if files.is_empty() {
        return PersonalizationSeed::new();
    }

    let base = SEED_BUDGET / files.len() as f64;
    let mut seed = PersonalizationSeed::new();

    for file in files {
        let mut weight = 0.0;
        if active.contains(file) {
            weight += base;
        }
        if mentions(file, mentioned) {
            weight += base;
        }
        if weight > 0.0 {
            seed.insert(file.clone(), weight);
        }
    }

    seed
}

/// True if the path text contains any of the mentioned substrings.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn mentions(file: &Path, mentioned: &HashSet<String>) -> bool {
    if mentioned.is_empty() {
        return false;
    }
    let text = file.to_string_lossy();
    mentioned.iter().any(|m| text.contains(m.as_str()))
}
