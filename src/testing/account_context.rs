use crate::configuration::models::engine_settings::EngineSettings;
use crate::services::backends::memory::InMemoryAccount;
use crate::services::clients::account_clients::AccountClients;
use crate::services::dispatcher::PostureEngine;
use crate::testing::{EXPOSED_ACCOUNT, SECURE_ACCOUNT};
use std::sync::Arc;
use test_context::AsyncTestContext;

pub struct AccountContext {
    pub account: Arc<InMemoryAccount>,
    pub clients: AccountClients,
    pub engine: PostureEngine,
}

impl AccountContext {
    pub fn from_yaml(document: &str) -> Self {
        let account = Arc::new(InMemoryAccount::from_yaml(document).expect("Failed to load account fixture"));
        let clients = AccountClients::from_backend(account.clone());
        let engine = PostureEngine::new(clients.clone(), EngineSettings::default());
        AccountContext {
            account,
            clients,
            engine,
        }
    }
}

impl AsyncTestContext for AccountContext {
    async fn setup() -> Self {
        AccountContext::from_yaml(EXPOSED_ACCOUNT)
    }
}

pub struct SecureAccountContext(pub AccountContext);

impl AsyncTestContext for SecureAccountContext {
    async fn setup() -> Self {
        SecureAccountContext(AccountContext::from_yaml(SECURE_ACCOUNT))
    }
}
