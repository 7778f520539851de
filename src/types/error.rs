//! Error types for the linkgraph library.

use thiserror::Error;

/// All errors that can occur while reading a link graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The requested construction path is not supported by this graph.
    #[error("Cannot load a link graph from {0}")]
    UnsupportedLoad(&'static str),

    /// The search index could not be reached or answered with an error status.
    #[error("HTTP error from {url}: {message}")]
    Http { url: String, message: String },

    /// The search index answered with a body we could not interpret.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or unreadable configuration file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for linkgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
