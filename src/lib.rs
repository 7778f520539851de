//! linkgraph: a search-index-backed web-link graph exposed as a read-only
//! sequential graph.
//!
//! Documents (a URL plus outlink URLs) are paged out of a Solr core and
//! numbered as they are enumerated. [`SequentialLinkGraph`] primes the
//! numbering with one full pass so the node count is known up front, then
//! serves node iterators and the node count to generic graph consumers.

pub mod cli;
pub mod config;
pub mod graph;
pub mod source;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::SourceConfig;
pub use graph::{
    GraphLoader, ImmutableSequentialGraph, ProgressLogger, SequentialLinkGraph, SolrGraphLoader,
};
pub use source::{
    DocumentFetcher, DocumentSet, GraphSource, NodeIter, SolrFetcher, SolrWebGraph, UrlIndex,
};
pub use types::{
    DocumentPage, GraphError, GraphResult, LinkDocument, Node, DEFAULT_PAGE_SIZE,
    DEFAULT_SOLR_ENDPOINT,
};
