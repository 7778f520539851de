//! Sequential graph views and the loaders that build them.

pub mod loader;
pub mod progress;
pub mod sequential;

pub use loader::{GraphLoader, SolrGraphLoader};
pub use progress::ProgressLogger;
pub use sequential::{ImmutableSequentialGraph, SequentialLinkGraph};
