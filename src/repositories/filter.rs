//! Search filter over the contacts collection.

use crate::models::Contact;
use serde_json::{json, Value};

/// A case-insensitive substring search across a contact's name, last
/// name, and company. An absent or empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    query: Option<String>,
}

impl ContactFilter {
    /// Builds a filter from a raw `search_query` parameter. The empty
    /// string carries no search intent and collapses to match-all.
    pub fn new(query: Option<String>) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()),
        }
    }

    /// The match-all filter.
    pub fn all() -> Self {
        Self::default()
    }

    /// The effective search term, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Renders the filter as a store filter document, `None` for
    /// match-all. The search term is regex-escaped so metacharacters
    /// match literally.
    pub fn as_document(&self) -> Option<Value> {
        let query = self.query.as_deref()?;
        let pattern = regex::escape(query);
        Some(json!({
            "$or": [
                { "name": { "$regex": pattern, "$options": "i" } },
                { "lastName": { "$regex": pattern, "$options": "i" } },
                { "company": { "$regex": pattern, "$options": "i" } },
            ]
        }))
    }

    /// In-memory equivalent of [`Self::as_document`], used where the
    /// store is not involved.
    pub fn matches(&self, contact: &Contact) -> bool {
        match self.query.as_deref() {
            None => true,
            Some(query) => {
                let query = query.to_lowercase();
                contact.name.to_lowercase().contains(&query)
                    || contact.last_name.to_lowercase().contains(&query)
                    || contact
                        .company
                        .as_deref()
                        .is_some_and(|company| company.to_lowercase().contains(&query))
            }
        }
    }
}
