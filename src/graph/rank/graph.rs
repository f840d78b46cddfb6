// src/graph/rank/graph.rs
//! The reference multigraph and the definition index.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::types::Tag;

/// One reference-to-definition relationship, labeled by the identifier that
/// induced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: PathBuf,
    pub target: PathBuf,
    pub weight: f64,
    pub ident: String,
}

/// Directed multigraph over files. Parallel edges are kept as separate
/// records; their weights are only combined by [`ReferenceGraph::transitions`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceGraph {
    nodes: BTreeSet<PathBuf>,
    edges: Vec<Edge>,
}

impl ReferenceGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, file: &Path) {
        if !self.nodes.contains(file) {
            self.nodes.insert(file.to_path_buf());
        }
    }

    pub fn add_edge(&mut self, source: &Path, target: &Path, weight: f64, ident: &str) {
        self.add_node(source);
        self.add_node(target);
        self.edges.push(Edge {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            weight,
            ident: ident.to_string(),
        });
    }

    /// Nodes in path order.
    #[must_use]
    pub fn nodes(&self) -> &BTreeSet<PathBuf> {
        &self.nodes
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All parallel edges from `source` to `target`.
    pub fn edges_between<'a>(
        &'a self,
        source: &'a Path,
        target: &'a Path,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source == source && e.target == target)
    }

    /// Per-source transition probabilities: parallel edge weights are summed
    /// and divided by the source's total outgoing weight. Sources without
    /// outgoing edges are absent.
    #[must_use]
    pub fn transitions(&self) -> BTreeMap<&Path, BTreeMap<&Path, f64>> {
        let mut combined: BTreeMap<&Path, BTreeMap<&Path, f64>> = BTreeMap::new();
        for edge in &self.edges {
            *combined
                .entry(edge.source.as_path())
                .or_default()
                .entry(edge.target.as_path())
                .or_default() += edge.weight;
        }

        for targets in combined.values_mut() {
            let total: f64 = targets.values().sum();
            if total > 0.0 {
                for weight in targets.values_mut() {
                    *weight /= total;
                }
            }
        }
        combined
    }
}

/// `(file, symbol) -> defining tags`, built once per ranking run.
#[derive(Debug, Clone, Default)]
pub struct DefinitionIndex {
    entries: BTreeMap<(PathBuf, String), BTreeSet<Tag>>,
}

impl DefinitionIndex {
    pub(crate) fn insert(&mut self, tag: &Tag) {
        self.entries
            .entry((tag.rel_path.clone(), tag.name.clone()))
            .or_default()
            .insert(tag.clone());
    }

    /// Definitions in `file`, ordered by ascending line (then by name).
    #[must_use]
    pub fn for_file(&self, file: &Path) -> Vec<&Tag> {
        let start = (file.to_path_buf(), String::new());
        let mut defs: Vec<&Tag> = self
            .entries
            .range(start..)
            .take_while(|((f, _), _)| f == file)
            .flat_map(|(_, tags)| tags.iter())
            .collect();
        defs.sort_by_key(|t| t.line);
        defs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
