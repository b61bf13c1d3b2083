//! Data models for the contacts collection.

pub mod contact;

pub use contact::{Contact, ContactFields, ContactInput, ContactUpdate};
