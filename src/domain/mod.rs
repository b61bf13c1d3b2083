//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! document ids, email addresses, and phone numbers. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system; because they also validate on
//! deserialization, records coming back from the store are re-checked at
//! the boundary.

pub mod email;
pub mod errors;
pub mod object_id;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use object_id::ObjectId;
pub use phone::PhoneNumber;
