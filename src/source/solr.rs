//! Web-link graph read from a search index.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;

use crate::config::SourceConfig;
use crate::types::{GraphResult, LinkDocument, Node};

use super::fetcher::{DocumentFetcher, SolrFetcher};
use super::url_index::UrlIndex;
use super::{GraphSource, NodeIter};

/// A link graph whose nodes are indexed documents and whose arcs are the
/// outlinks between them.
///
/// Node ids are handed out while iterating, in document order. Outlinks are
/// resolved against the ids known at that point, so links to documents that
/// come later are missing from the first pass and present from the second
/// pass on. Outlinks to URLs that are not documents never resolve.
pub struct SolrWebGraph<F: DocumentFetcher = SolrFetcher> {
    fetcher: F,
    rows: usize,
    index: RefCell<UrlIndex>,
}

impl SolrWebGraph<SolrFetcher> {
    /// Graph served by the Solr core described in `config`.
    pub fn new(config: &SourceConfig) -> GraphResult<Self> {
        Ok(Self::with_fetcher(SolrFetcher::new(config)?, config.rows))
    }
}

impl<F: DocumentFetcher> SolrWebGraph<F> {
    /// Graph over documents from any fetcher, `rows` documents per request.
    pub fn with_fetcher(fetcher: F, rows: usize) -> Self {
        Self {
            fetcher,
            rows: rows.max(1),
            index: RefCell::new(UrlIndex::new()),
        }
    }

    /// URL of node `id`, once numbered.
    pub fn url_of(&self, id: u64) -> Option<String> {
        self.index.borrow().url_of(id).map(str::to_string)
    }

    /// Id of `url`, once numbered.
    pub fn id_of(&self, url: &str) -> Option<u64> {
        self.index.borrow().id_of(url)
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Start a pass over the documents.
    pub fn nodes(&self) -> LinkNodeIter<'_, F> {
        LinkNodeIter {
            graph: self,
            page: Vec::new().into_iter(),
            start: 0,
            num_found: None,
            yielded: HashSet::new(),
            done: false,
        }
    }
}

impl<F: DocumentFetcher> GraphSource for SolrWebGraph<F> {
    fn num_nodes(&self) -> usize {
        self.index.borrow().len()
    }

    fn node_iterator(&self) -> GraphResult<NodeIter<'_>> {
        Ok(Box::new(self.nodes()))
    }
}

impl<F: DocumentFetcher> fmt::Display for SolrWebGraph<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolrWebGraph({})", self.fetcher.describe())
    }
}

impl<F: DocumentFetcher> fmt::Debug for SolrWebGraph<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolrWebGraph")
            .field("source", &self.fetcher.describe())
            .field("rows", &self.rows)
            .field("nodes", &self.num_nodes())
            .finish()
    }
}

/// One pass over a [`SolrWebGraph`], fetching pages on demand.
pub struct LinkNodeIter<'a, F: DocumentFetcher> {
    graph: &'a SolrWebGraph<F>,
    page: std::vec::IntoIter<LinkDocument>,
    start: u64,
    num_found: Option<u64>,
    yielded: HashSet<u64>,
    done: bool,
}

impl<F: DocumentFetcher> LinkNodeIter<'_, F> {
    /// Load the next page. Returns false when the documents are exhausted.
    fn refill(&mut self) -> GraphResult<bool> {
        if let Some(total) = self.num_found {
            if self.start >= total {
                return Ok(false);
            }
        }
        let page = self.graph.fetcher.fetch(self.start, self.graph.rows)?;
        log::debug!(
            "Fetched {} documents ({} usable) at offset {} of {}",
            page.fetched,
            page.docs.len(),
            self.start,
            page.num_found
        );
        if page.fetched == 0 {
            return Ok(false);
        }
        self.start += page.fetched as u64;
        self.num_found = Some(page.num_found);
        self.page = page.docs.into_iter();
        Ok(true)
    }

    fn number(&mut self, doc: LinkDocument) -> Option<Node> {
        let mut index = self.graph.index.borrow_mut();
        let id = index.assign(&doc.url);
        let position = self.yielded.len() as u64;
        if !self.yielded.insert(id) {
            log::warn!("Skipping duplicate document {}", doc.url);
            return None;
        }
        if id != position {
            log::warn!(
                "Document {} numbered {} but read at position {}; document order changed between passes",
                doc.url,
                id,
                position
            );
        }

        let successors = doc
            .outlinks
            .iter()
            .filter_map(|link| index.id_of(link))
            .collect();
        Some(Node::new(id, successors))
    }
}

impl<F: DocumentFetcher> Iterator for LinkNodeIter<'_, F> {
    type Item = GraphResult<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(doc) = self.page.next() {
                match self.number(doc) {
                    Some(node) => return Some(Ok(node)),
                    None => continue,
                }
            }
            if self.done {
                return None;
            }
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
