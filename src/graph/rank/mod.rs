// src/graph/rank/mod.rs
pub mod builder;
pub mod graph;
pub mod pagerank;
pub mod personalization;

pub use builder::{GraphBuilder, GraphData};
pub use graph::{DefinitionIndex, Edge, ReferenceGraph};
pub use pagerank::RankedScores;
pub use personalization::PersonalizationSeed;

use std::collections::HashSet;
use std::path::PathBuf;

use crate::types::Tag;

/// Result of one ranking run.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub data: GraphData,
    pub scores: RankedScores,
}

/// Orchestrates graph construction and ranking.
pub struct GraphEngine;

impl GraphEngine {
    #[must_use]
    #[allow(clippy::implicit_hasher)]
    pub fn rank(tags: &[Tag], active: &HashSet<PathBuf>, mentioned: &HashSet<String>) -> Ranking {
        let data = GraphBuilder::new(active, mentioned).build(tags);
        let scores = pagerank::compute(&data.graph, Some(&data.personalization));
        Ranking { data, scores }
    }
}
