use crate::services::clients::{DatabaseClient, IdentityClient, NetworkClient, StorageClient};
use std::sync::Arc;

/// The client set for one account, injected into the engine at construction.
#[derive(Clone)]
pub struct AccountClients {
    pub storage: Arc<dyn StorageClient>,
    pub database: Arc<dyn DatabaseClient>,
    pub identity: Arc<dyn IdentityClient>,
    pub network: Arc<dyn NetworkClient>,
}

impl AccountClients {
    /// Uses one backend for every resource category.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: StorageClient + DatabaseClient + IdentityClient + NetworkClient + 'static,
    {
        Self {
            storage: backend.clone(),
            database: backend.clone(),
            identity: backend.clone(),
            network: backend,
        }
    }
}
