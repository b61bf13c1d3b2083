use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use contacts_api::domain::ObjectId;
use contacts_api::error::{StoreError, StoreResult};
use contacts_api::models::{Contact, ContactFields};
use contacts_api::pagination::PageWindow;
use contacts_api::repositories::{ContactFilter, ContactRepository};

/// In-memory stand-in for the document store. Records call counts so tests
/// can assert which repository methods a service path actually touched.
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    next_id: Arc<Mutex<u64>>,
    failing: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            failing: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Make every subsequent call fail with a transport error.
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    /// Seed a contact directly, bypassing validation and id assignment.
    pub fn add_contact(&self, contact: Contact) {
        self.contacts
            .lock()
            .unwrap()
            .insert(contact.id.to_string(), contact);
    }

    pub fn add_contacts(&self, contacts: Vec<Contact>) {
        for contact in contacts {
            self.add_contact(contact);
        }
    }

    /// Snapshot of a stored contact, for asserting what a write left behind.
    pub fn stored(&self, id: &str) -> Option<Contact> {
        self.contacts.lock().unwrap().get(id).cloned()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        self.call_counts
            .lock()
            .unwrap()
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    fn check_failing(&self) -> StoreResult<()> {
        if *self.failing.lock().unwrap() {
            Err(StoreError::Http("mock store failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn allocate_id(&self) -> ObjectId {
        let mut next = self.next_id.lock().unwrap();
        let id = ObjectId::parse(format!("{:024x}", *next)).unwrap();
        *next += 1;
        id
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, fields: &ContactFields) -> StoreResult<Contact> {
        self.track_call("create");
        self.check_failing()?;
        fields.validate().map_err(StoreError::InvalidDocument)?;

        let contact = Contact {
            id: self.allocate_id(),
            name: fields.name.clone(),
            last_name: fields.last_name.clone(),
            email: fields.email.clone(),
            phone_number: fields.phone_number.clone(),
            company: fields.company.clone(),
        };
        self.contacts
            .lock()
            .unwrap()
            .insert(contact.id.to_string(), contact.clone());
        Ok(contact)
    }

    async fn find(&self, filter: &ContactFilter, window: PageWindow) -> StoreResult<Vec<Contact>> {
        self.track_call("find");
        self.check_failing()?;

        let mut matched: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .values()
            .filter(|contact| filter.matches(contact))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(matched
            .into_iter()
            .skip(window.offset as usize)
            .take(window.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ContactFilter) -> StoreResult<u64> {
        self.track_call("count");
        self.check_failing()?;

        let count = self
            .contacts
            .lock()
            .unwrap()
            .values()
            .filter(|contact| filter.matches(contact))
            .count();
        Ok(count as u64)
    }

    async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_id");
        self.check_failing()?;
        Ok(self.contacts.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn save(&self, contact: &Contact) -> StoreResult<Contact> {
        self.track_call("save");
        self.check_failing()?;
        contact.validate().map_err(StoreError::InvalidDocument)?;

        let mut contacts = self.contacts.lock().unwrap();
        if !contacts.contains_key(contact.id.as_str()) {
            return Err(StoreError::NotFound(format!(
                "document {} not found",
                contact.id
            )));
        }
        contacts.insert(contact.id.to_string(), contact.clone());
        Ok(contact.clone())
    }

    async fn delete(&self, contact: &Contact) -> StoreResult<()> {
        self.track_call("delete");
        self.check_failing()?;
        self.contacts.lock().unwrap().remove(contact.id.as_str());
        Ok(())
    }

    async fn health(&self) -> StoreResult<()> {
        self.track_call("health");
        self.check_failing()
    }
}
