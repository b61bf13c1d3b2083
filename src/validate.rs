//! Request-shape field validators.
//!
//! Validators are pure checks that accumulate structured `{message, field}`
//! descriptors into a [`Violations`] list instead of failing fast: every
//! check runs, and the caller reports the full list in one 400 response
//! before touching persistence. The email/phone/identifier checks delegate
//! to the domain value objects so the request layer and the store boundary
//! enforce the same rules.

use crate::domain::{EmailAddress, ObjectId, PhoneNumber};
use serde::Serialize;
use std::fmt;

/// Message for a missing required field.
pub const REQUIRED_FIELD: &str = "Required field missing";

/// Message for a malformed email address.
pub const INVALID_EMAIL: &str = "Invalid email";

/// Message for a malformed phone number.
pub const INVALID_PHONE: &str = "Invalid phone number: it must be a string of ten digits";

/// Message for a malformed route id parameter.
pub const INVALID_IDENTIFIER: &str = "Route parameter is not a valid document id";

/// A single field-level validation failure, serialized as `{message, field}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }

    /// A required field was absent, null, or empty.
    pub fn required(field: &str) -> Self {
        Self::new(REQUIRED_FIELD, field)
    }

    pub fn invalid_email() -> Self {
        Self::new(INVALID_EMAIL, "email")
    }

    pub fn invalid_phone() -> Self {
        Self::new(INVALID_PHONE, "phoneNumber")
    }

    /// A route id parameter failed the document-id shape check.
    pub fn invalid_identifier() -> Self {
        Self::new(INVALID_IDENTIFIER, "contactId")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// An accumulating list of field-level validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<FieldError>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Required-field check: absent, null (already `None` after JSON
/// deserialization), and empty string all fail. On success the value is
/// handed back for use; on failure a descriptor is accumulated.
pub fn required(
    value: Option<String>,
    field: &'static str,
    violations: &mut Violations,
) -> Option<String> {
    match value {
        Some(s) if !s.is_empty() => Some(s),
        _ => {
            violations.push(FieldError::required(field));
            None
        }
    }
}

/// Optional email check: absent passes through, anything else must satisfy
/// [`EmailAddress`] (which admits the empty string).
pub fn email(value: Option<String>, violations: &mut Violations) -> Option<EmailAddress> {
    let value = value?;
    match EmailAddress::new(value) {
        Ok(email) => Some(email),
        Err(_) => {
            violations.push(FieldError::invalid_email());
            None
        }
    }
}

/// Optional phone check: absent passes through, anything else must satisfy
/// [`PhoneNumber`] (empty or exactly ten digits).
pub fn phone_number(value: Option<String>, violations: &mut Violations) -> Option<PhoneNumber> {
    let value = value?;
    match PhoneNumber::new(value) {
        Ok(phone) => Some(phone),
        Err(_) => {
            violations.push(FieldError::invalid_phone());
            None
        }
    }
}

/// Route-id check. Unlike the accumulating field checks this is all-or-
/// nothing: a malformed id rejects the whole request before any lookup.
pub fn identifier(value: &str) -> Result<ObjectId, FieldError> {
    ObjectId::parse(value).map_err(|_| FieldError::invalid_identifier())
}

/// Base-10 non-negative integer check for pagination parameters. Returns
/// `None` for anything that is not a plain digit string (signs, spaces,
/// decimals, overflow); callers fall back to defaults instead of failing.
pub fn non_negative_integer(value: &str) -> Option<u64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
