//! HTTP error responses.

use crate::error::ContactError;
use crate::validate::FieldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// An error response: a status code, a client-facing message, and an
/// optional list of field-level problems. Serializes as
/// `{message, errors?}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a [FieldError]>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: &self.message,
            errors: self.errors.as_deref(),
        });
        (self.status, body).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        let message = match &err {
            // Store detail is logged here and kept out of the response.
            ContactError::Store { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "store operation failed");
                format!("Could not {}: {}", operation, source.public_summary())
            }
            _ => err.to_string(),
        };

        let status = match &err {
            ContactError::Validation(_)
            | ContactError::InvalidId(_)
            | ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::NotFound => StatusCode::NOT_FOUND,
            ContactError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let errors = match err {
            ContactError::Validation(violations) => Some(violations.into_vec()),
            ContactError::InvalidId(field_error) => Some(vec![field_error]),
            _ => None,
        };

        ApiError {
            status,
            message,
            errors,
        }
    }
}
