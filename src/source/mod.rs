//! Graph sources: the data providers a sequential graph view wraps.

pub mod fetcher;
pub mod solr;
pub mod url_index;

use std::fmt;

use crate::types::{GraphResult, Node};

pub use fetcher::{parse_select_body, DocumentFetcher, DocumentSet, SolrFetcher};
pub use solr::{LinkNodeIter, SolrWebGraph};
pub use url_index::UrlIndex;

/// Forward-only iterator over the nodes of a graph, in id order.
pub type NodeIter<'a> = Box<dyn Iterator<Item = GraphResult<Node>> + 'a>;

/// A provider of nodes and successor lists.
///
/// Sources may only learn their size by being enumerated, so `num_nodes`
/// is reliable only after one complete pass over `node_iterator`.
pub trait GraphSource: fmt::Display {
    /// Number of nodes known to the source.
    fn num_nodes(&self) -> usize;

    /// Start a fresh pass over all nodes.
    fn node_iterator(&self) -> GraphResult<NodeIter<'_>>;
}

impl<S: GraphSource + ?Sized> GraphSource for &S {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn node_iterator(&self) -> GraphResult<NodeIter<'_>> {
        (**self).node_iterator()
    }
}

impl<S: GraphSource + ?Sized> GraphSource for Box<S> {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    fn node_iterator(&self) -> GraphResult<NodeIter<'_>> {
        (**self).node_iterator()
    }
}
