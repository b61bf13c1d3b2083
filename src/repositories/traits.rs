use crate::domain::ObjectId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use crate::pagination::PageWindow;
use crate::repositories::filter::ContactFilter;
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (document store, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact; the store assigns its id.
    async fn create(&self, fields: &ContactFields) -> StoreResult<Contact>;

    /// Retrieve the contacts matching `filter` within the window, sorted
    /// ascending by last name.
    async fn find(&self, filter: &ContactFilter, window: PageWindow) -> StoreResult<Vec<Contact>>;

    /// Count all contacts matching `filter`, ignoring any window.
    async fn count(&self, filter: &ContactFilter) -> StoreResult<u64>;

    /// Retrieve a single contact by id, `None` when absent.
    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Contact>>;

    /// Persist changes to an existing contact and return the stored
    /// result.
    async fn save(&self, contact: &Contact) -> StoreResult<Contact>;

    /// Remove a previously fetched contact. Deleting a contact that has
    /// already disappeared is not an error.
    async fn delete(&self, contact: &Contact) -> StoreResult<()>;

    /// Check that the underlying storage is reachable.
    async fn health(&self) -> StoreResult<()>;
}
