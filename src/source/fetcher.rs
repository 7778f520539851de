//! Paged document retrieval: from a Solr core or from memory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::config::SourceConfig;
use crate::types::document::{deserialize_dump, OneOrMany, SelectResponse};
use crate::types::{DocumentPage, GraphError, GraphResult, LinkDocument};

/// Fetches documents page by page in a stable order.
pub trait DocumentFetcher {
    /// Fetch up to `rows` documents starting at offset `start`.
    fn fetch(&self, start: u64, rows: usize) -> GraphResult<DocumentPage>;

    /// Short description of where documents come from.
    fn describe(&self) -> String;
}

/// Reads documents from the `select` handler of a Solr core.
#[derive(Clone)]
pub struct SolrFetcher {
    agent: ureq::Agent,
    endpoint: String,
    query: String,
    url_field: String,
    outlinks_field: String,
    sort: String,
}

impl SolrFetcher {
    /// Build a fetcher from a configuration.
    pub fn new(config: &SourceConfig) -> GraphResult<Self> {
        config.validate()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Ok(Self {
            agent,
            endpoint: config.endpoint.clone(),
            query: config.query.clone(),
            url_field: config.url_field.clone(),
            outlinks_field: config.outlinks_field.clone(),
            sort: config.sort.clone(),
        })
    }

    /// Base URL of the core.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn select_url(&self) -> String {
        format!("{}select", self.endpoint)
    }
}

impl DocumentFetcher for SolrFetcher {
    fn fetch(&self, start: u64, rows: usize) -> GraphResult<DocumentPage> {
        let url = self.select_url();
        let fields = format!("{},{}", self.url_field, self.outlinks_field);
        log::debug!("GET {url} start={start} rows={rows}");

        let response = self
            .agent
            .get(&url)
            .query("q", &self.query)
            .query("fl", &fields)
            .query("sort", &self.sort)
            .query("start", &start.to_string())
            .query("rows", &rows.to_string())
            .query("wt", "json")
            .call()
            .map_err(|e| GraphError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        parse_select(response.into_reader(), &self.url_field, &self.outlinks_field)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Turn a Solr JSON `select` body into a page of link documents.
///
/// Documents without a URL are skipped; a missing outlinks field means no
/// outlinks.
pub fn parse_select_body(
    body: &str,
    url_field: &str,
    outlinks_field: &str,
) -> GraphResult<DocumentPage> {
    parse_select(body.as_bytes(), url_field, outlinks_field)
}

fn parse_select(
    reader: impl Read,
    url_field: &str,
    outlinks_field: &str,
) -> GraphResult<DocumentPage> {
    let parsed: SelectResponse = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            GraphError::Io(e.into())
        } else {
            GraphError::MalformedResponse(format!("select response: {e}"))
        }
    })?;

    let fetched = parsed.response.docs.len();
    let mut docs = Vec::with_capacity(parsed.response.docs.len());
    for mut fields in parsed.response.docs {
        let url = match fields.remove(url_field) {
            Some(value) => OneOrMany::deserialize(value)
                .map_err(|e| GraphError::MalformedResponse(format!("field {url_field}: {e}")))?
                .into_first(),
            None => None,
        };
        let Some(url) = url else {
            log::warn!("Skipping document without {url_field}");
            continue;
        };
        let outlinks = match fields.remove(outlinks_field) {
            Some(value) => OneOrMany::deserialize(value)
                .map_err(|e| {
                    GraphError::MalformedResponse(format!("field {outlinks_field}: {e}"))
                })?
                .into_vec(),
            None => Vec::new(),
        };
        docs.push(LinkDocument { url, outlinks });
    }

    Ok(DocumentPage {
        num_found: parsed.response.num_found,
        fetched,
        docs,
    })
}

/// A fixed list of documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    name: String,
    docs: Vec<LinkDocument>,
}

impl DocumentSet {
    /// Wrap a list of documents.
    pub fn new(name: impl Into<String>, docs: Vec<LinkDocument>) -> Self {
        Self {
            name: name.into(),
            docs,
        }
    }

    /// Read a JSON dump: an array of documents or `{"docs": [...]}`.
    pub fn from_json_file(path: &Path) -> GraphResult<Self> {
        let file = File::open(path)?;
        let docs = Self::read_docs(BufReader::new(file))?;
        Ok(Self::new(path.display().to_string(), docs))
    }

    /// Read a JSON dump from any reader.
    pub fn from_reader(name: impl Into<String>, reader: impl Read) -> GraphResult<Self> {
        Ok(Self::new(name, Self::read_docs(reader)?))
    }

    fn read_docs(reader: impl Read) -> GraphResult<Vec<LinkDocument>> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let docs = deserialize_dump(&mut de)?;
        de.end()?;
        Ok(docs)
    }

    /// All documents.
    pub fn docs(&self) -> &[LinkDocument] {
        &self.docs
    }
}

impl DocumentFetcher for DocumentSet {
    fn fetch(&self, start: u64, rows: usize) -> GraphResult<DocumentPage> {
        let start = (start as usize).min(self.docs.len());
        let end = start.saturating_add(rows).min(self.docs.len());
        Ok(DocumentPage {
            num_found: self.docs.len() as u64,
            fetched: end - start,
            docs: self.docs[start..end].to_vec(),
        })
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
