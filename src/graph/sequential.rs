//! Read-only sequential graph over any graph source.

use std::fmt;
use std::io::Read;

use crate::source::{GraphSource, NodeIter, SolrFetcher, SolrWebGraph};
use crate::types::{GraphError, GraphResult};

use super::loader::{GraphLoader, SolrGraphLoader};
use super::progress::ProgressLogger;

/// What a consumer of a sequentially readable graph needs: the node count,
/// a forward pass over nodes and successors, and a printable name.
pub trait ImmutableSequentialGraph: fmt::Display {
    /// Number of nodes.
    fn num_nodes(&self) -> usize;

    /// A fresh pass over all nodes in id order.
    fn node_iterator(&self) -> GraphResult<NodeIter<'_>>;

    /// Number of arcs, counted with one full pass.
    fn num_arcs(&self) -> GraphResult<u64> {
        let mut arcs = 0u64;
        for node in self.node_iterator()? {
            arcs += node?.outdegree() as u64;
        }
        Ok(arcs)
    }
}

/// A [`GraphSource`] exposed as an [`ImmutableSequentialGraph`].
///
/// Construction runs one complete pass over the source and throws the nodes
/// away. Sources that number nodes while enumerating them only know their
/// size afterwards, so once this returns `num_nodes` is final.
pub struct SequentialLinkGraph<S: GraphSource> {
    source: S,
}

impl<S: GraphSource> SequentialLinkGraph<S> {
    /// Wrap `source` and prime it.
    pub fn new(source: S) -> GraphResult<Self> {
        let graph = Self { source };
        graph.prime()?;
        Ok(graph)
    }

    fn prime(&self) -> GraphResult<()> {
        for node in self.source.node_iterator()? {
            node?;
        }
        log::info!("Primed {} with {} nodes", self.source, self.source.num_nodes());
        Ok(())
    }

    /// Number of nodes reported by the source.
    pub fn num_nodes(&self) -> usize {
        self.source.num_nodes()
    }

    /// A fresh pass over the source.
    pub fn node_iterator(&self) -> GraphResult<NodeIter<'_>> {
        self.source.node_iterator()
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl SequentialLinkGraph<SolrWebGraph<SolrFetcher>> {
    /// Load the link graph from the configured Solr core.
    ///
    /// `name` and `progress` are accepted for loader compatibility and do
    /// not influence which graph is loaded.
    pub fn load(name: &str, progress: Option<&mut ProgressLogger>) -> GraphResult<Self> {
        SolrGraphLoader::from_env()?.load(name, progress)
    }

    /// Same as [`load`](Self::load).
    pub fn load_sequential(name: &str, progress: Option<&mut ProgressLogger>) -> GraphResult<Self> {
        SolrGraphLoader::from_env()?.load_sequential(name, progress)
    }

    /// Same as [`load`](Self::load).
    pub fn load_offline(name: &str, progress: Option<&mut ProgressLogger>) -> GraphResult<Self> {
        SolrGraphLoader::from_env()?.load_offline(name, progress)
    }

    /// [`load`](Self::load) without a progress logger.
    pub fn open(name: &str) -> GraphResult<Self> {
        Self::load(name, None)
    }

    /// [`load_sequential`](Self::load_sequential) without a progress logger.
    pub fn open_sequential(name: &str) -> GraphResult<Self> {
        Self::load_sequential(name, None)
    }

    /// [`load_offline`](Self::load_offline) without a progress logger.
    pub fn open_offline(name: &str) -> GraphResult<Self> {
        Self::load_offline(name, None)
    }

    /// Always fails: the link graph cannot be read from a byte stream.
    pub fn load_once(_input: &mut dyn Read) -> GraphResult<Self> {
        Err(GraphError::UnsupportedLoad("an input stream"))
    }
}

impl<S: GraphSource> ImmutableSequentialGraph for SequentialLinkGraph<S> {
    fn num_nodes(&self) -> usize {
        self.source.num_nodes()
    }

    fn node_iterator(&self) -> GraphResult<NodeIter<'_>> {
        self.source.node_iterator()
    }
}

impl<S: GraphSource> fmt::Display for SequentialLinkGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl<S: GraphSource> fmt::Debug for SequentialLinkGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialLinkGraph")
            .field("source", &self.source.to_string())
            .field("nodes", &self.source.num_nodes())
            .finish()
    }
}
