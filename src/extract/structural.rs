// src/extract/structural.rs
//! Tree-sitter tag extraction.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::rc::Rc;

use tree_sitter::{Parser, Query, QueryCursor};

use crate::error::{RepoMapError, Result};
use crate::lang::Lang;
use crate::types::Tag;

thread_local! {
    // Compiled queries are reused by every file a worker thread parses.
    static QUERIES: RefCell<HashMap<Lang, Rc<Query>>> = RefCell::new(HashMap::new());
}

/// Tags found by the structural stage, split by kind.
#[derive(Debug, Default)]
pub struct StructuralTags {
    pub defs: Vec<Tag>,
    pub refs: Vec<Tag>,
}

/// Runs the language's tag query over `content`.
///
/// A node captured as a definition is never reported as a reference, even when
/// a broader reference pattern also matches it.
///
/// # Errors
/// Returns an error if the grammar or query cannot be loaded, or if parsing fails.
pub fn extract(
    lang: Lang,
    rel_path: &Path,
    abs_path: &Path,
    content: &str,
) -> Result<StructuralTags> {
    let query = query_for(lang)?;
    let mut parser = Parser::new();
    parser
        .set_language(lang.grammar())
        .map_err(|e| RepoMapError::Grammar {
            lang: lang.name(),
            detail: format!("{e:?}"),
        })?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| RepoMapError::Parse(rel_path.to_path_buf()))?;

    let def_idx = query.capture_index_for_name("def");
    let ref_idx = query.capture_index_for_name("ref");
    let source = content.as_bytes();

    let mut defs = Vec::new();
    let mut refs = Vec::new();
    let mut cursor = QueryCursor::new();
    for m in cursor.matches(&query, tree.root_node(), source) {
        for capture in m.captures {
            let Ok(text) = capture.node.utf8_text(source) else {
                continue;
            };
            let found = (capture.node.id(), capture.node.start_position().row, text);
            if Some(capture.index) == def_idx {
                defs.push(found);
            } else if Some(capture.index) == ref_idx {
                refs.push(found);
            }
        }
    }

    let def_nodes: HashSet<usize> = defs.iter().map(|(id, _, _)| *id).collect();
    let mut seen_refs = HashSet::new();

    Ok(StructuralTags {
        defs: defs
            .iter()
            .map(|(_, row, name)| Tag::definition(rel_path, abs_path, *row, name))
            .collect(),
        refs: refs
            .iter()
            .filter(|(id, _, _)| !def_nodes.contains(id) && seen_refs.insert(*id))
            .map(|(_, row, name)| Tag::reference(rel_path, abs_path, Some(*row), name))
            .collect(),
    })
}

fn query_for(lang: Lang) -> Result<Rc<Query>> {
    QUERIES.with(|cell| {
        if let Some(query) = cell.borrow().get(&lang) {
            return Ok(Rc::clone(query));
        }
        let query = Query::new(lang.grammar(), lang.q_tags()).map_err(|e| RepoMapError::Query {
            lang: lang.name(),
            detail: format!("{e:?}"),
        })?;
        let query = Rc::new(query);
        cell.borrow_mut().insert(lang, Rc::clone(&query));
        Ok(query)
    })
}
