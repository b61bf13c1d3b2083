//! Contact record and the request-body shapes that feed it.

use crate::domain::{EmailAddress, ObjectId, PhoneNumber};
use crate::validate::{FieldError, Violations};
use serde::{Deserialize, Serialize};

/// A persisted contact. This is both the store document shape and the
/// API response shape: absent optional fields stay absent rather than
/// being serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ObjectId,
    pub name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    /// Checks model invariants. Runs at the persistence boundary so no
    /// document with an empty name or last name is ever written, whatever
    /// path produced it.
    pub fn validate(&self) -> Result<(), Violations> {
        check_required_names(&self.name, &self.last_name)
    }

    /// Applies the fields present in `update`, leaving the rest unchanged.
    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(company) = update.company {
            self.company = Some(company);
        }
    }
}

/// The raw fields of a create or update body, after whitespace
/// normalization but before validation. Everything is optional at this
/// stage; unknown members are ignored and JSON null reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
}

/// A validated, store-ready creation payload. Identifier assignment
/// belongs to the store, so this carries everything but the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl ContactFields {
    /// Same invariants as [`Contact::validate`], checked before insert.
    pub fn validate(&self) -> Result<(), Violations> {
        check_required_names(&self.name, &self.last_name)
    }
}

/// A validated partial update. `None` means "leave the stored value
/// alone", which covers both absent fields and fields sent as the empty
/// string; a partial update can therefore never blank out a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub phone_number: Option<PhoneNumber>,
    pub company: Option<String>,
}

fn check_required_names(name: &str, last_name: &str) -> Result<(), Violations> {
    let mut violations = Violations::new();
    if name.is_empty() {
        violations.push(FieldError::required("name"));
    }
    if last_name.is_empty() {
        violations.push(FieldError::required("lastName"));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
