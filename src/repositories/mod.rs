//! Repository abstractions over contact storage.

pub mod filter;
pub mod store_contact_repository;
pub mod traits;

pub use filter::ContactFilter;
pub use store_contact_repository::StoreContactRepository;
pub use traits::ContactRepository;
