//! Request handlers for the HTTP surface.
//!
//! Handlers stay thin: extract inputs, call the contact service, and let
//! [`ApiError`] conversions shape failures. All response bodies are JSON
//! except the plain-text branch of the fallback.

use crate::models::Contact;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::services::{ContactPage, ListParams};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Unwrap a JSON body extraction, turning syntax and content-type
/// problems into the standard 400 shape instead of axum's default
/// plain-text rejection.
fn body_or_reject(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_request(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    }
}

/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body_or_reject(body)?;
    let contact = state.contacts.create_contact(body).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ContactPage>, ApiError> {
    let page = state.contacts.list_contacts(&params).await?;
    Ok(Json(page))
}

/// GET /contacts/{contact_id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.contacts.get_contact(&contact_id).await?;
    Ok(Json(contact))
}

/// PUT /contacts/{contact_id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    let body = body_or_reject(body)?;
    let contact = state.contacts.update_contact(&contact_id, body).await?;
    Ok(Json(contact))
}

/// DELETE /contacts/{contact_id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete_contact(&contact_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Body of the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime_secs: u64,
}

/// GET /health: 200 while the store answers its probe, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status_code, status) = match state.contacts.health().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "store health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    };

    (status_code, Json(body))
}

/// Whether the request accepts a JSON response. No Accept header counts
/// as accepting anything.
fn accepts_json(headers: &HeaderMap) -> bool {
    match headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        None => true,
        Some(accept) => {
            accept.contains("application/json")
                || accept.contains("application/*")
                || accept.contains("*/*")
        }
    }
}

/// Fallback for unmatched routes: 404 as JSON, or plain text for
/// clients that do not accept JSON.
pub async fn route_not_found(headers: HeaderMap) -> Response {
    if accepts_json(&headers) {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Route not found" })),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, "Route not found").into_response()
    }
}
