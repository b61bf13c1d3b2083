//! Error types for store access, configuration, and contact operations.

use crate::validate::{FieldError, Violations};
use thiserror::Error;

/// Errors from the document store client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport-level failure (connection refused, DNS, TLS).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The store answered with a non-success status.
    #[error("store error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The store answered with a body that did not parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The store has no document at the requested location.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The store rejected the request's credentials.
    #[error("authentication with the store failed")]
    Unauthorized,

    /// A document failed model invariants at the persistence boundary.
    #[error("document validation failed: {0}")]
    InvalidDocument(Violations),
}

impl StoreError {
    /// Short, client-safe description used in 500 response messages. The
    /// full error is logged server-side; responses never carry transport
    /// detail.
    pub fn public_summary(&self) -> &'static str {
        match self {
            StoreError::InvalidDocument(_) => "document validation failed",
            _ => "server error",
        }
    }
}

/// Errors from loading configuration out of the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Outcome of a contact operation, mapped onto an HTTP status by the
/// server layer. Display strings double as client-facing messages.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One or more request fields failed validation (400).
    #[error("Incorrect fields validation error")]
    Validation(Violations),

    /// The route id parameter is not a well-formed document id (400).
    #[error("Invalid contact identifier")]
    InvalidId(FieldError),

    /// The request body was not a JSON object (400).
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// No contact exists under the requested id (404).
    #[error("Contact not found")]
    NotFound,

    /// The store failed while carrying out the named operation (500).
    #[error("could not {operation}")]
    Store {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ContactError {
    pub fn store(operation: &'static str, source: StoreError) -> Self {
        ContactError::Store { operation, source }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::FieldError;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "store error (status 502): bad gateway");
        assert_eq!(err.public_summary(), "server error");
    }

    #[test]
    fn test_invalid_document_summary() {
        let mut violations = Violations::new();
        violations.push(FieldError::required("name"));
        let err = StoreError::InvalidDocument(violations);
        assert_eq!(err.public_summary(), "document validation failed");
        assert!(err.to_string().contains("name: Required field missing"));
    }

    #[test]
    fn test_contact_error_messages() {
        assert_eq!(
            ContactError::Validation(Violations::new()).to_string(),
            "Incorrect fields validation error"
        );
        assert_eq!(
            ContactError::InvalidId(FieldError::invalid_identifier()).to_string(),
            "Invalid contact identifier"
        );
        assert_eq!(ContactError::NotFound.to_string(), "Contact not found");
        assert_eq!(
            ContactError::store("create contact", StoreError::Timeout).to_string(),
            "could not create contact"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "PORT".to_string(),
            reason: "must be a number".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for PORT: must be a number");
    }
}
