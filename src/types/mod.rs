//! All data types for the linkgraph library.

pub mod document;
pub mod error;
pub mod node;

pub use document::{DocumentPage, LinkDocument};
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Solr core queried when no configuration says otherwise.
pub const DEFAULT_SOLR_ENDPOINT: &str = "http://localhost:8898/solr/";

/// Documents requested per `select` call.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Default HTTP timeout for one `select` call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
