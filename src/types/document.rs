//! Link documents and the Solr JSON response envelope.

use serde::{Deserialize, Deserializer, Serialize};

/// A crawled page: its URL and the URLs it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDocument {
    /// Page URL. Identifies the node.
    pub url: String,
    /// Outgoing link URLs, in document order.
    #[serde(default)]
    pub outlinks: Vec<String>,
}

impl LinkDocument {
    /// Create a document.
    pub fn new(url: impl Into<String>, outlinks: Vec<String>) -> Self {
        Self {
            url: url.into(),
            outlinks,
        }
    }
}

/// One page of documents fetched from a source.
#[derive(Debug, Clone, Default)]
pub struct DocumentPage {
    /// Total number of documents matching the query.
    pub num_found: u64,
    /// Documents the source returned for this page, including ones dropped
    /// from `docs` for lacking a URL. Paging advances by this count.
    pub fetched: usize,
    /// Documents on this page.
    pub docs: Vec<LinkDocument>,
}

/// Top-level body returned by the Solr `select` handler with `wt=json`.
#[derive(Debug, Deserialize)]
pub(crate) struct SelectResponse {
    pub response: SelectResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectResult {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Solr returns stored fields either as a scalar or as an array depending on
/// the schema, so accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }

    pub fn into_first(self) -> Option<String> {
        self.into_vec().into_iter().next()
    }
}

/// Deserialize a document dump: either a bare array or `{"docs": [...]}`.
pub(crate) fn deserialize_dump<'de, D>(deserializer: D) -> Result<Vec<LinkDocument>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Dump {
        Bare(Vec<LinkDocument>),
        Wrapped { docs: Vec<LinkDocument> },
    }

    Ok(match Dump::deserialize(deserializer)? {
        Dump::Bare(docs) => docs,
        Dump::Wrapped { docs } => docs,
    })
}
