//! Configuration loading from file, environment, and defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{
    GraphError, GraphResult, DEFAULT_PAGE_SIZE, DEFAULT_SOLR_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};

/// Environment variable naming a TOML configuration file.
pub const CONFIG_ENV: &str = "LINKGRAPH_CONFIG";

/// Environment variable overriding the Solr endpoint.
pub const ENDPOINT_ENV: &str = "LINKGRAPH_SOLR_URL";

/// Where and how to read the link graph from Solr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the Solr core, ending in `/`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Query selecting the documents that make up the graph.
    #[serde(default = "default_query")]
    pub query: String,
    /// Stored field holding the page URL.
    #[serde(default = "default_url_field")]
    pub url_field: String,
    /// Stored field holding the outlink URLs.
    #[serde(default = "default_outlinks_field")]
    pub outlinks_field: String,
    /// Sort clause. Must give a stable order across passes.
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Documents per request.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_SOLR_ENDPOINT.to_string()
}

fn default_query() -> String {
    "*:*".to_string()
}

fn default_url_field() -> String {
    "url".to_string()
}

fn default_outlinks_field() -> String {
    "outlinks".to_string()
}

fn default_sort() -> String {
    "url asc".to_string()
}

fn default_rows() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            query: default_query(),
            url_field: default_url_field(),
            outlinks_field: default_outlinks_field(),
            sort: default_sort(),
            rows: default_rows(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Config pointing at `endpoint`, everything else default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::default().endpoint(endpoint)
    }

    /// Replace the endpoint.
    pub fn endpoint(self, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self
        }
        .normalized()
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config.normalized())
    }

    /// Write as TOML.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration using priority order:
    /// 1. Explicit file (CLI arg)
    /// 2. File named by `LINKGRAPH_CONFIG`
    /// 3. Built-in defaults
    ///
    /// `LINKGRAPH_SOLR_URL`, when set, replaces the endpoint in every case.
    pub fn resolve(explicit: Option<&Path>) -> GraphResult<Self> {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match file {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                log::debug!("Solr endpoint overridden by {ENDPOINT_ENV}");
                config.endpoint = endpoint;
            }
        }

        config.validate()?;
        Ok(config.normalized())
    }

    /// Check values that would make every request fail.
    pub fn validate(&self) -> GraphResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(GraphError::Config("endpoint must not be empty".into()));
        }
        if self.rows == 0 {
            return Err(GraphError::Config("rows must be at least 1".into()));
        }
        if self.url_field.is_empty() {
            return Err(GraphError::Config("url_field must not be empty".into()));
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.endpoint.trim();
        self.endpoint = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        self
    }
}
