// src/graph/rank/pagerank.rs
//! `PageRank` algorithm implementation for file ranking.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::graph::ReferenceGraph;
use super::personalization::PersonalizationSeed;

/// `file -> score`; scores over all nodes sum to ~1.
pub type RankedScores = BTreeMap<PathBuf, f64>;

const DAMPING: f64 = 0.85;
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;

/// Computes personalized `PageRank` scores by power iteration.
///
/// With a non-empty seed, both teleportation and the mass of dangling nodes
/// follow the normalized seed; otherwise both are uniform. A seed carrying no
/// usable mass falls back to uniform with a warning. An empty graph yields
/// empty scores.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(graph: &ReferenceGraph, seed: Option<&PersonalizationSeed>) -> RankedScores {
    if graph.is_empty() {
        return RankedScores::new();
    }

    let nodes: Vec<&Path> = graph.nodes().iter().map(PathBuf::as_path).collect();
    let n = nodes.len();
    let index: HashMap<&Path, usize> = nodes.iter().enumerate().map(|(i, p)| (*p, i)).collect();
    let outgoing = build_transitions(graph, &index, n);
    let dist = teleport_distribution(&nodes, seed);

    let mut ranks = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let next = iterate_once(&ranks, &outgoing, &dist);
        let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
        ranks = next;
        if delta < TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged {
        tracing::debug!(iterations, "pagerank stopped at the iteration limit");
    }

    if ranks.iter().any(|r| !r.is_finite()) {
        tracing::warn!("pagerank produced non-finite scores, falling back to uniform ranks");
        ranks = vec![1.0 / n as f64; n];
    }

    normalize(&mut ranks);
    nodes
        .into_iter()
        .zip(ranks)
        .map(|(p, r)| (p.to_path_buf(), r))
        .collect()
}

/// Combined, normalized transition probabilities indexed by node position.
/// Nodes with no outgoing edges get an empty list.
fn build_transitions(
    graph: &ReferenceGraph,
    index: &HashMap<&Path, usize>,
    n: usize,
) -> Vec<Vec<(usize, f64)>> {
    let mut outgoing = vec![Vec::new(); n];
    for (source, targets) in graph.transitions() {
        let Some(&s) = index.get(source) else {
            continue;
        };
        outgoing[s] = targets
            .into_iter()
            .filter_map(|(target, p)| index.get(target).map(|&t| (t, p)))
            .collect();
    }
    outgoing
}

#[allow(clippy::cast_precision_loss)]
fn teleport_distribution(nodes: &[&Path], seed: Option<&PersonalizationSeed>) -> Vec<f64> {
    let n = nodes.len();
    let uniform = vec![1.0 / n as f64; n];

    let Some(seed) = seed.filter(|s| !s.is_empty()) else {
        return uniform;
    };

    let raw: Vec<f64> = nodes
        .iter()
        .map(|p| seed.get(*p).copied().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = raw.iter().sum();

    if !(total.is_finite() && total > 0.0) {
        tracing::warn!(total, "personalization has no usable mass, using uniform distribution");
        return uniform;
    }

    raw.into_iter().map(|w| w / total).collect()
}

fn iterate_once(ranks: &[f64], outgoing: &[Vec<(usize, f64)>], dist: &[f64]) -> Vec<f64> {
    let dangling: f64 = ranks
        .iter()
        .zip(outgoing)
        .filter(|(_, out)| out.is_empty())
        .map(|(r, _)| r)
        .sum();

    let mut next: Vec<f64> = dist
        .iter()
        .map(|d| (1.0 - DAMPING) * d + DAMPING * dangling * d)
        .collect();

    for (source, out) in outgoing.iter().enumerate() {
        let mass = DAMPING * ranks[source];
        for &(target, p) in out {
            next[target] += mass * p;
        }
    }

    next
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}
