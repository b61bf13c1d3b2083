//! Async wrapper around the synchronous StoreClient.
//!
//! Provides an async interface by running each HTTP operation on the
//! blocking thread pool via `tokio::task::spawn_blocking`, keeping the
//! async runtime free while requests are in flight.

use crate::error::{StoreError, StoreResult};
use crate::store::{FindQuery, StoreClient};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async interface to the document store.
///
/// Mirrors the synchronous [`StoreClient`] operations; implementations
/// must be safe to share across request handlers.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn insert(&self, collection: &str, document: &Value) -> StoreResult<Value>;
    async fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Value>>;
    async fn count(&self, collection: &str, filter: Option<&Value>) -> StoreResult<u64>;
    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;
    async fn replace(&self, collection: &str, id: &str, document: &Value) -> StoreResult<Value>;
    async fn delete_document(&self, collection: &str, id: &str) -> StoreResult<()>;
    async fn health(&self) -> StoreResult<()>;
}

/// Async wrapper around a synchronous [`StoreClient`].
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

fn join_error(e: tokio::task::JoinError) -> StoreError {
    StoreError::Http(format!("Task join error: {}", e))
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn insert(&self, collection: &str, document: &Value) -> StoreResult<Value> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let document = document.clone();

        tokio::task::spawn_blocking(move || client.insert(&collection, &document))
            .await
            .map_err(join_error)?
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> StoreResult<Vec<Value>> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let query = query.clone();

        tokio::task::spawn_blocking(move || client.find(&collection, &query))
            .await
            .map_err(join_error)?
    }

    async fn count(&self, collection: &str, filter: Option<&Value>) -> StoreResult<u64> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let filter = filter.cloned();

        tokio::task::spawn_blocking(move || client.count(&collection, filter.as_ref()))
            .await
            .map_err(join_error)?
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.find_by_id(&collection, &id))
            .await
            .map_err(join_error)?
    }

    async fn replace(&self, collection: &str, id: &str, document: &Value) -> StoreResult<Value> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let id = id.to_string();
        let document = document.clone();

        tokio::task::spawn_blocking(move || client.replace(&collection, &id, &document))
            .await
            .map_err(join_error)?
    }

    async fn delete_document(&self, collection: &str, id: &str) -> StoreResult<()> {
        let client = self.client.clone();
        let collection = collection.to_string();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_document(&collection, &id))
            .await
            .map_err(join_error)?
    }

    async fn health(&self) -> StoreResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.health())
            .await
            .map_err(join_error)?
    }
}
