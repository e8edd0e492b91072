use crate::error::SearchError;
use crate::filter::{FileFilter, Filters};
use fstree::{DirNode, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How multiple filters merge into one match decision. Leaving the
/// condition unset selects the first listed filter only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    And,
    Or,
}

/// Searches the tree under `root` for files matching `filters` under the
/// given `condition`, returning matching file names.
///
/// The walk is breadth first; within a node, files are tested in listed
/// order and matching names keep that order. Every request entry is
/// resolved into a predicate before any file is tested, so an invalid
/// request fails without a partial result even when the ignored-by-mode
/// entries or an empty tree would never have exercised it.
pub fn find_files(
    root: &DirNode,
    filters: &Filters,
    condition: Option<Condition>,
) -> Result<Vec<String>, SearchError> {
    let predicates = build_predicates(filters)?;
    if condition.is_none() && predicates.is_empty() {
        return Err(SearchError::NoFilters);
    }

    let mut matched = Vec::new();
    let mut visited = 0usize;
    for node in root.bfs() {
        visited += 1;
        for file in &node.files {
            if is_match(file, &predicates, condition) {
                matched.push(file.name().to_string());
            }
        }
    }
    debug!(visited, matched = matched.len(), "Search finished");
    Ok(matched)
}

fn build_predicates(filters: &Filters) -> Result<Vec<FileFilter>, SearchError> {
    filters
        .iter()
        .map(|(kind, arg)| FileFilter::build(kind, arg))
        .collect()
}

fn is_match(file: &File, predicates: &[FileFilter], condition: Option<Condition>) -> bool {
    match condition {
        // Only the first listed filter decides, on purpose.
        None => predicates
            .first()
            .expect("at least one filter when condition is unset")
            .matches(file),
        Some(Condition::And) => predicates.iter().all(|p| p.matches(file)),
        Some(Condition::Or) => predicates.iter().any(|p| p.matches(file)),
    }
}
