//! Shared application state.

use crate::services::ContactService;
use std::sync::Arc;
use std::time::Instant;

/// State injected into every request handler. Cheap to clone; the
/// service is shared behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<ContactService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(contacts: ContactService) -> Self {
        Self {
            contacts: Arc::new(contacts),
            started_at: Instant::now(),
        }
    }
}
