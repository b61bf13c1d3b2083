//! Contacts API - a REST service for managing contacts backed by a document store.
//!
//! The service exposes create, list (with search and offset pagination),
//! fetch, partial update, and delete over a single `contacts` collection.
//! Validation runs twice: request shapes are checked before any store
//! traffic, and model invariants are enforced again at the persistence
//! boundary.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (ids, email addresses, phone numbers)
//! - **models**: The contact record and request-body shapes
//! - **normalize** / **validate**: Request normalization and field validators
//! - **pagination**: Offset windows and navigation links
//! - **store**: HTTP client for the document store's data API
//! - **repositories**: Typed contact persistence over the store
//! - **services**: Business logic tying validation to persistence
//! - **server**: Axum routing, handlers, and error mapping
//! - **config** / **error**: Environment configuration and error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;
pub mod validate;

pub use config::Config;
pub use error::{ConfigError, ContactError, StoreError};
pub use models::{Contact, ContactFields, ContactInput, ContactUpdate};
pub use server::AppState;
pub use services::{ContactPage, ContactService, ListParams};
pub use store::StoreClient;
