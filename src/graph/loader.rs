//! Loading a graph by name.

use std::io::Read;

use crate::config::SourceConfig;
use crate::source::{DocumentFetcher, SolrFetcher, SolrWebGraph};
use crate::types::{GraphError, GraphResult};

use super::progress::ProgressLogger;
use super::sequential::{ImmutableSequentialGraph, SequentialLinkGraph};

/// The "load a graph by name" interface generic graph tools call into.
///
/// Random-access, sequential and offline loads all default to [`load`];
/// loading from a raw stream is unsupported unless a loader says otherwise.
///
/// [`load`]: GraphLoader::load
pub trait GraphLoader {
    /// The graph type produced.
    type Graph: ImmutableSequentialGraph;

    /// Load the graph called `name`.
    fn load(&self, name: &str, progress: Option<&mut ProgressLogger>) -> GraphResult<Self::Graph>;

    /// Load for sequential access only.
    fn load_sequential(
        &self,
        name: &str,
        progress: Option<&mut ProgressLogger>,
    ) -> GraphResult<Self::Graph> {
        self.load(name, progress)
    }

    /// Load without bringing the graph into memory.
    fn load_offline(
        &self,
        name: &str,
        progress: Option<&mut ProgressLogger>,
    ) -> GraphResult<Self::Graph> {
        self.load(name, progress)
    }

    /// Load from a byte stream.
    fn load_once(&self, _input: &mut dyn Read) -> GraphResult<Self::Graph> {
        Err(GraphError::UnsupportedLoad("an input stream"))
    }
}

/// Loads the link graph held by one Solr core, whatever name is asked for.
#[derive(Clone)]
pub struct SolrGraphLoader<F: DocumentFetcher + Clone = SolrFetcher> {
    fetcher: F,
    rows: usize,
}

impl SolrGraphLoader<SolrFetcher> {
    /// Loader for the core described by `config`.
    pub fn new(config: SourceConfig) -> GraphResult<Self> {
        Ok(Self {
            fetcher: SolrFetcher::new(&config)?,
            rows: config.rows,
        })
    }

    /// Loader for the core resolved from the environment or defaults.
    pub fn from_env() -> GraphResult<Self> {
        Self::new(SourceConfig::resolve(None)?)
    }
}

impl<F: DocumentFetcher + Clone> SolrGraphLoader<F> {
    /// Loader reading documents through `fetcher`.
    pub fn with_fetcher(fetcher: F, rows: usize) -> Self {
        Self { fetcher, rows }
    }

    /// The fetcher every loaded graph reads through.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: DocumentFetcher + Clone> GraphLoader for SolrGraphLoader<F> {
    type Graph = SequentialLinkGraph<SolrWebGraph<F>>;

    fn load(&self, name: &str, _progress: Option<&mut ProgressLogger>) -> GraphResult<Self::Graph> {
        log::debug!("Loading {name:?} from {}", self.fetcher.describe());
        SequentialLinkGraph::new(SolrWebGraph::with_fetcher(self.fetcher.clone(), self.rows))
    }
}
