//! Business services built on the repository layer.

pub mod contact_service;

pub use contact_service::{ContactPage, ContactService, ListParams};
