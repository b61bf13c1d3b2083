//! Contact service layer.
//!
//! Business logic for the contact operations: request-shape validation,
//! pagination, and orchestration of repository calls. Outcomes are
//! reported as [`ContactError`] values; the server layer maps them onto
//! HTTP statuses.

use crate::error::{ContactError, ContactResult, StoreResult};
use crate::models::{Contact, ContactFields, ContactInput, ContactUpdate};
use crate::normalize::trim_string_fields;
use crate::pagination::{page_links, PageWindow};
use crate::repositories::{ContactFilter, ContactRepository};
use crate::validate::{self, Violations};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Route the pagination links point back at.
const CONTACTS_PATH: &str = "/contacts";

/// Raw query parameters of a listing request. Everything arrives as text
/// and is parsed leniently; bad values fall back to defaults instead of
/// failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub search_query: Option<String>,
}

/// One page of the contact listing, with links to the neighbouring pages.
/// Absent links serialize as null so clients can test for them directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub total_records: u64,
    pub previous_link: Option<String>,
    pub next_link: Option<String>,
    pub results: Vec<Contact>,
}

/// Service implementing the contact operations over a repository.
pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    origin_url: String,
}

impl ContactService {
    /// Create a new contact service. `origin_url` is the public base URL
    /// used when building pagination links.
    pub fn new(repo: Arc<dyn ContactRepository>, origin_url: String) -> Self {
        Self { repo, origin_url }
    }

    /// Normalize and decode a request body. Whitespace is trimmed from
    /// top-level string members first so validation sees canonical
    /// values; anything that does not decode into the known field shape
    /// is a malformed body.
    fn decode_body(mut body: Value) -> ContactResult<ContactInput> {
        trim_string_fields(&mut body);
        serde_json::from_value(body).map_err(|e| ContactError::MalformedBody(e.to_string()))
    }

    fn parse_id(raw: &str) -> ContactResult<crate::domain::ObjectId> {
        validate::identifier(raw).map_err(ContactError::InvalidId)
    }

    /// Create a contact from a raw request body.
    ///
    /// All field checks run before the request is rejected, so the
    /// response lists every problem at once. Nothing reaches the store
    /// unless validation passes.
    pub async fn create_contact(&self, body: Value) -> ContactResult<Contact> {
        let input = Self::decode_body(body)?;

        let mut violations = Violations::new();
        let name = validate::required(input.name, "name", &mut violations);
        let last_name = validate::required(input.last_name, "lastName", &mut violations);
        let email = validate::email(input.email, &mut violations);
        let phone_number = validate::phone_number(input.phone_number, &mut violations);

        let (name, last_name) = match (name, last_name) {
            (Some(name), Some(last_name)) if violations.is_empty() => (name, last_name),
            _ => return Err(ContactError::Validation(violations)),
        };

        let fields = ContactFields {
            name,
            last_name,
            email,
            phone_number,
            company: input.company,
        };

        self.repo
            .create(&fields)
            .await
            .map_err(|e| ContactError::store("create contact", e))
    }

    /// List contacts matching the query parameters, sorted ascending by
    /// last name, with total count and neighbouring page links.
    pub async fn list_contacts(&self, params: &ListParams) -> ContactResult<ContactPage> {
        let window = PageWindow::from_query(params.limit.as_deref(), params.offset.as_deref());
        let filter = ContactFilter::new(params.search_query.clone());

        let results = self
            .repo
            .find(&filter, window)
            .await
            .map_err(|e| ContactError::store("get contacts", e))?;
        let total_records = self
            .repo
            .count(&filter)
            .await
            .map_err(|e| ContactError::store("get contacts", e))?;

        let links = page_links(
            &self.origin_url,
            CONTACTS_PATH,
            window,
            filter.query(),
            total_records,
        );

        Ok(ContactPage {
            total_records,
            previous_link: links.previous,
            next_link: links.next,
            results,
        })
    }

    /// Fetch a single contact. The id is checked for shape before any
    /// lookup happens.
    pub async fn get_contact(&self, raw_id: &str) -> ContactResult<Contact> {
        let id = Self::parse_id(raw_id)?;

        self.repo
            .find_by_id(&id)
            .await
            .map_err(|e| ContactError::store("get contact", e))?
            .ok_or(ContactError::NotFound)
    }

    /// Apply a partial update to an existing contact and return the
    /// stored result.
    ///
    /// The contact is looked up first, so an absent id reports 404 even
    /// when the body also has problems. Only fields carrying a non-empty
    /// value are applied; absent and empty fields leave the stored
    /// values alone. All field checks run before anything is saved, so a
    /// rejected update leaves the stored record untouched.
    pub async fn update_contact(&self, raw_id: &str, body: Value) -> ContactResult<Contact> {
        let id = Self::parse_id(raw_id)?;

        let mut contact = self
            .repo
            .find_by_id(&id)
            .await
            .map_err(|e| ContactError::store("update contact", e))?
            .ok_or(ContactError::NotFound)?;

        let input = Self::decode_body(body)?;

        let mut violations = Violations::new();
        let email = validate::email(input.email.filter(|s| !s.is_empty()), &mut violations);
        let phone_number = validate::phone_number(
            input.phone_number.filter(|s| !s.is_empty()),
            &mut violations,
        );
        if !violations.is_empty() {
            return Err(ContactError::Validation(violations));
        }

        contact.apply(ContactUpdate {
            name: input.name.filter(|s| !s.is_empty()),
            last_name: input.last_name.filter(|s| !s.is_empty()),
            email,
            phone_number,
            company: input.company.filter(|s| !s.is_empty()),
        });

        self.repo
            .save(&contact)
            .await
            .map_err(|e| ContactError::store("update contact", e))
    }

    /// Delete a contact by id: look it up, remove it when present, and
    /// succeed either way. Repeating the call gives the same outcome.
    pub async fn delete_contact(&self, raw_id: &str) -> ContactResult<()> {
        let id = Self::parse_id(raw_id)?;

        let existing = self
            .repo
            .find_by_id(&id)
            .await
            .map_err(|e| ContactError::store("delete contact", e))?;

        if let Some(contact) = existing {
            self.repo
                .delete(&contact)
                .await
                .map_err(|e| ContactError::store("delete contact", e))?;
        }

        Ok(())
    }

    /// Check that the backing store is reachable.
    pub async fn health(&self) -> StoreResult<()> {
        self.repo.health().await
    }
}
