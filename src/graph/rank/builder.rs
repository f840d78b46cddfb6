// src/graph/rank/builder.rs
//! Graph construction: definition index, weighted edges and personalization.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use super::graph::{DefinitionIndex, ReferenceGraph};
use super::personalization::{self, PersonalizationSeed};
use crate::types::{Tag, TagKind};

/// Weight of the self-loop kept for a definition nobody references.
pub const SELF_LOOP_WEIGHT: f64 = 0.1;
/// Weight of an ordinary reference edge.
pub const REFERENCE_WEIGHT: f64 = 1.0;
/// Multiplier for edges leaving an active or mentioned file.
pub const FOCUS_BOOST: f64 = 10.0;

/// Everything one ranking run derives from the tag set.
#[derive(Debug, Clone, Default)]
pub struct GraphData {
    pub graph: ReferenceGraph,
    pub definitions: DefinitionIndex,
    pub personalization: PersonalizationSeed,
}

/// Turns a flat tag sequence into the reference graph.
pub struct GraphBuilder<'a> {
    active: &'a HashSet<PathBuf>,
    mentioned: &'a HashSet<String>,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn new(active: &'a HashSet<PathBuf>, mentioned: &'a HashSet<String>) -> Self {
        Self { active, mentioned }
    }

    /// Builds the graph, the definition index and the personalization seed.
    ///
    /// Every referencing occurrence gets an edge to every definer of the same
    /// identifier, so the cost per identifier is `definers x references`.
    /// Generic names shared by many files produce dense edge sets; this is
    /// accepted and not capped.
    #[must_use]
    pub fn build(&self, tags: &[Tag]) -> GraphData {
        let mut graph = ReferenceGraph::new();
        let mut definitions = DefinitionIndex::default();
        let mut defines: BTreeMap<&str, BTreeSet<&Path>> = BTreeMap::new();
        let mut references: BTreeMap<&str, Vec<&Path>> = BTreeMap::new();

        for tag in tags {
            graph.add_node(&tag.rel_path);
            match tag.kind {
                TagKind::Definition => {
                    defines
                        .entry(tag.name.as_str())
                        .or_default()
                        .insert(tag.rel_path.as_path());
                    definitions.insert(tag);
                }
                TagKind::Reference => {
                    references
                        .entry(tag.name.as_str())
                        .or_default()
                        .push(tag.rel_path.as_path());
                }
            }
        }

        for (ident, definers) in &defines {
            match references.get(ident) {
                Some(referencers) => {
                    self.add_reference_edges(&mut graph, ident, definers, referencers);
                }
                None => {
                    for definer in definers {
                        graph.add_edge(definer, definer, SELF_LOOP_WEIGHT, ident);
                    }
                }
            }
        }

        let personalization =
            personalization::compute(graph.nodes(), self.active, self.mentioned);

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            seeded = personalization.len(),
            "built reference graph"
        );

        GraphData {
            graph,
            definitions,
            personalization,
        }
    }

    fn add_reference_edges(
        &self,
        graph: &mut ReferenceGraph,
        ident: &str,
        definers: &BTreeSet<&Path>,
        referencers: &[&Path],
    ) {
        for referencer in referencers {
            let weight = if self.is_focused(referencer) {
                REFERENCE_WEIGHT * FOCUS_BOOST
            } else {
                REFERENCE_WEIGHT
            };
            for definer in definers {
                graph.add_edge(referencer, definer, weight, ident);
            }
        }
    }

    /// True for active files and files whose path contains a mentioned substring.
    #[must_use]
    pub fn is_focused(&self, file: &Path) -> bool {
        self.active.contains(file) || personalization::mentions(file, self.mentioned)
    }
}
