//! HTTP client for the document store's JSON data API.
//!
//! This module provides a synchronous HTTP client that can be used from
//! async contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, error mapping, and query-string construction; documents
//! travel as raw JSON values and typed decoding happens in the repository
//! layer.

mod async_wrapper;
pub use async_wrapper::{AsyncStoreClient, AsyncStoreClientImpl};

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Sort direction for collection scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Options for a collection scan: an optional filter document plus
/// windowing and ordering.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub filter: Option<Value>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
    pub sort: Option<(String, SortOrder)>,
}

/// Response wrapper for collection scans.
#[derive(Debug, Deserialize)]
struct DocumentsResponse {
    documents: Vec<Value>,
}

/// Response wrapper for count queries.
#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// HTTP client for the document store.
///
/// Uses `ureq` for synchronous requests and is called from async contexts
/// through [`AsyncStoreClientImpl`].
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL of the store's data API
    base_url: String,

    /// Optional API key sent as `x-api-key`
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.store_url.clone(),
            api_key: config.store_api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Attach the API key header when one is configured.
    fn prepare(&self, request: ureq::Request) -> ureq::Request {
        match &self.api_key {
            Some(key) => request.set("x-api-key", key),
            None => request,
        }
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        self.prepare(self.agent.get(&url))
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &Value) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);

        let result = self
            .prepare(self.agent.post(&url))
            .send_json(body)
            .map_err(|e| self.map_error(e));

        if let Err(e) = &result {
            tracing::error!("POST {} failed: {:?}", url, e);
        }
        result
    }

    /// Execute a PUT request with a JSON body.
    fn put(&self, path: &str, body: &Value) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        self.prepare(self.agent.put(&url))
            .send_json(body)
            .map_err(|e| self.map_error(e))
    }

    /// Execute a DELETE request.
    fn delete(&self, path: &str) -> Result<ureq::Response, StoreError> {
        let url = self.build_url(path);
        self.prepare(self.agent.delete(&url))
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => StoreError::Unauthorized,
                    404 => StoreError::NotFound(message),
                    _ => StoreError::Api {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::Http("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::Http(transport.to_string())
                }
            }
        }
    }

    /// Read a response body and decode it as JSON.
    fn read_json<T: serde::de::DeserializeOwned>(response: ureq::Response) -> StoreResult<T> {
        let body = response
            .into_string()
            .map_err(|e| StoreError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(StoreError::Json)
    }

    /// Build the query string for a collection scan.
    fn query_string(query: &FindQuery) -> StoreResult<String> {
        let mut params = Vec::new();
        if let Some(filter) = &query.filter {
            let raw = serde_json::to_string(filter)?;
            params.push(format!("filter={}", urlencoding::encode(&raw)));
        }
        if let Some(limit) = query.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(skip) = query.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some((field, order)) = &query.sort {
            params.push(format!("sort={}", urlencoding::encode(field)));
            params.push(format!("order={}", order.as_param()));
        }

        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{}", params.join("&")))
        }
    }

    // ========================= Document Operations =========================

    /// Insert a document; the store assigns its id and returns the full
    /// created document.
    pub fn insert(&self, collection: &str, document: &Value) -> StoreResult<Value> {
        let path = format!("/{}", collection);
        let response = self.post(&path, document)?;
        Self::read_json(response)
    }

    /// Scan a collection with optional filter, window, and sort.
    pub fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Value>> {
        let path = format!("/{}{}", collection, Self::query_string(query)?);
        let response = self.get(&path)?;
        let wrapper: DocumentsResponse = Self::read_json(response)?;
        Ok(wrapper.documents)
    }

    /// Count the documents matching an optional filter.
    pub fn count(&self, collection: &str, filter: Option<&Value>) -> StoreResult<u64> {
        let query = FindQuery {
            filter: filter.cloned(),
            ..FindQuery::default()
        };
        let path = format!("/{}/_count{}", collection, Self::query_string(&query)?);
        let response = self.get(&path)?;
        let wrapper: CountResponse = Self::read_json(response)?;
        Ok(wrapper.count)
    }

    /// Fetch a single document by id; a missing document is `None`, not an
    /// error.
    pub fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let path = format!("/{}/{}", collection, id);
        match self.get(&path) {
            Ok(response) => Ok(Some(Self::read_json(response)?)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replace the document under `id` and return the stored result.
    pub fn replace(&self, collection: &str, id: &str, document: &Value) -> StoreResult<Value> {
        let path = format!("/{}/{}", collection, id);
        let response = self.put(&path, document)?;
        Self::read_json(response)
    }

    /// Delete the document under `id`. Returns [`StoreError::NotFound`]
    /// when nothing was stored there; callers decide whether that matters.
    pub fn delete_document(&self, collection: &str, id: &str) -> StoreResult<()> {
        let path = format!("/{}/{}", collection, id);
        self.delete(&path)?;
        Ok(())
    }

    /// Probe the store's health endpoint.
    pub fn health(&self) -> StoreResult<()> {
        self.get("/_health")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        let client =
            StoreClient::with_base_url("http://store.example.com/data".to_string(), None);

        assert_eq!(
            client.build_url("/contacts"),
            "http://store.example.com/data/contacts"
        );
        assert_eq!(
            client.build_url("contacts"),
            "http://store.example.com/data/contacts"
        );

        let client_with_slash =
            StoreClient::with_base_url("http://store.example.com/data/".to_string(), None);
        assert_eq!(
            client_with_slash.build_url("/contacts"),
            "http://store.example.com/data/contacts"
        );
    }

    #[test]
    fn test_query_string_empty() {
        assert_eq!(
            StoreClient::query_string(&FindQuery::default()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_query_string_full() {
        let query = FindQuery {
            filter: Some(json!({"name": "Ada"})),
            limit: Some(10),
            skip: Some(20),
            sort: Some(("lastName".to_string(), SortOrder::Ascending)),
        };
        assert_eq!(
            StoreClient::query_string(&query).unwrap(),
            "?filter=%7B%22name%22%3A%22Ada%22%7D&limit=10&skip=20&sort=lastName&order=asc"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            store_url: "http://localhost:4100/data".to_string(),
            store_api_key: Some("test-key-123".to_string()),
            port: 3001,
            origin_url: "http://localhost:3001".to_string(),
            request_timeout: 10,
        };

        let client = StoreClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:4100/data");
        assert_eq!(client.api_key.as_deref(), Some("test-key-123"));
    }
}
