use crate::domain::ObjectId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::pagination::PageWindow;
use crate::repositories::filter::ContactFilter;
use crate::repositories::traits::ContactRepository;
use crate::store::{AsyncStoreClient, FindQuery, SortOrder};
use async_trait::async_trait;
use std::sync::Arc;

/// Name of the contacts collection in the store.
const COLLECTION: &str = "contacts";

/// Field the listing is ordered by.
const SORT_FIELD: &str = "lastName";

/// Contact repository backed by the document store.
///
/// Translates between typed contacts and store documents, and enforces
/// model invariants before anything is written: no document with an empty
/// name or last name reaches the store, whichever caller asked.
pub struct StoreContactRepository {
    store: Arc<dyn AsyncStoreClient>,
}

impl StoreContactRepository {
    /// Create a new StoreContactRepository over the given store client.
    pub fn new(store: Arc<dyn AsyncStoreClient>) -> Self {
        Self { store }
    }

    fn decode(document: serde_json::Value) -> StoreResult<Contact> {
        serde_json::from_value(document).map_err(StoreError::Json)
    }
}

#[async_trait]
impl ContactRepository for StoreContactRepository {
    async fn create(&self, fields: &ContactFields) -> StoreResult<Contact> {
        fields.validate().map_err(StoreError::InvalidDocument)?;

        let document = serde_json::to_value(fields)?;
        let created = self.store.insert(COLLECTION, &document).await?;
        Self::decode(created)
    }

    async fn find(&self, filter: &ContactFilter, window: PageWindow) -> StoreResult<Vec<Contact>> {
        let query = FindQuery {
            filter: filter.as_document(),
            limit: Some(window.limit),
            skip: Some(window.offset),
            sort: Some((SORT_FIELD.to_string(), SortOrder::Ascending)),
        };

        let documents = self.store.find(COLLECTION, &query).await?;
        documents.into_iter().map(Self::decode).collect()
    }

    async fn count(&self, filter: &ContactFilter) -> StoreResult<u64> {
        let document = filter.as_document();
        self.store.count(COLLECTION, document.as_ref()).await
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Contact>> {
        match self.store.find_by_id(COLLECTION, id.as_str()).await? {
            Some(document) => Ok(Some(Self::decode(document)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, contact: &Contact) -> StoreResult<Contact> {
        contact.validate().map_err(StoreError::InvalidDocument)?;

        let document = serde_json::to_value(contact)?;
        let stored = self
            .store
            .replace(COLLECTION, contact.id.as_str(), &document)
            .await?;
        Self::decode(stored)
    }

    async fn delete(&self, contact: &Contact) -> StoreResult<()> {
        match self
            .store
            .delete_document(COLLECTION, contact.id.as_str())
            .await
        {
            // Already gone between lookup and delete leaves the same end
            // state.
            Err(StoreError::NotFound(_)) => Ok(()),
            other => other,
        }
    }

    async fn health(&self) -> StoreResult<()> {
        self.store.health().await
    }
}
