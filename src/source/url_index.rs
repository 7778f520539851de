//! Dense numbering of document URLs.

use std::collections::HashMap;

/// Maps URLs to consecutive ids in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct UrlIndex {
    ids: HashMap<String, u64>,
    urls: Vec<String>,
}

impl UrlIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `url`, assigning the next free id if it is new.
    pub fn assign(&mut self, url: &str) -> u64 {
        if let Some(&id) = self.ids.get(url) {
            return id;
        }
        let id = self.urls.len() as u64;
        self.ids.insert(url.to_string(), id);
        self.urls.push(url.to_string());
        id
    }

    /// Id of `url`, if already assigned.
    pub fn id_of(&self, url: &str) -> Option<u64> {
        self.ids.get(url).copied()
    }

    /// URL with id `id`.
    pub fn url_of(&self, id: u64) -> Option<&str> {
        self.urls.get(id as usize).map(String::as_str)
    }

    /// Number of ids assigned.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// True when no id has been assigned.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
