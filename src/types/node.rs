//! A node as produced by a sequential node iterator.

use serde::Serialize;

/// One node of a sequential graph together with its successor list.
///
/// Successors are sorted ascending and contain no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Dense node id, starting at 0.
    pub id: u64,
    /// Ids of the nodes this node links to.
    pub successors: Vec<u64>,
}

impl Node {
    /// Create a node, normalizing the successor list.
    pub fn new(id: u64, mut successors: Vec<u64>) -> Self {
        successors.sort_unstable();
        successors.dedup();
        Self { id, successors }
    }

    /// Number of successors.
    pub fn outdegree(&self) -> usize {
        self.successors.len()
    }
}
