//! Contacts API - Main entry point
//!
//! Wires configuration, the document store client, the repository, and
//! the contact service together, then serves HTTP until shutdown.

use anyhow::Result;
use contacts_api::repositories::{ContactRepository, StoreContactRepository};
use contacts_api::server::{self, AppState};
use contacts_api::services::ContactService;
use contacts_api::store::{AsyncStoreClient, AsyncStoreClientImpl};
use contacts_api::{Config, StoreClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using document store at {}", config.store_url);

    // Initialize the store client and repository
    let sync_client = StoreClient::new(&config);
    let store = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;
    let contact_repo =
        Arc::new(StoreContactRepository::new(store)) as Arc<dyn ContactRepository>;

    let service = ContactService::new(contact_repo, config.origin_url.clone());

    // Probe the store once at startup; an unreachable store is logged but
    // not fatal, since it may come up later
    match service.health().await {
        Ok(()) => info!("Document store connection established"),
        Err(e) => warn!("Document store not reachable yet: {}", e),
    }

    let state = AppState::new(service);
    server::run(&config, state).await?;

    info!("Contacts service shutdown complete");
    Ok(())
}
