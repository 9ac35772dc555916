use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::services::clients::IdentityClient;
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::ACCOUNT_MFA_ENABLED;
use crate::services::pillars::{Inspection, Inspector};
use async_trait::async_trait;
use std::sync::Arc;

pub const ROOT_ACCOUNT: &str = "root-account";

/// The provider reports the flag as an integer; only exactly 1 means enabled.
const MFA_ENABLED: i64 = 1;

pub struct IdentityMfaPillar {
    client: Arc<dyn IdentityClient>,
}

impl IdentityMfaPillar {
    pub fn new(client: Arc<dyn IdentityClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Inspector for IdentityMfaPillar {
    type Target = String;

    fn pillar(&self) -> Pillar {
        Pillar::IdentityMfa
    }

    async fn inspect(&self) -> Result<Inspection<String>, ClientError> {
        let summary = self.client.get_account_summary().await?;
        let mut inspection = Inspection::new();
        if summary.get(ACCOUNT_MFA_ENABLED) != Some(&MFA_ENABLED) {
            inspection.targets.push(ROOT_ACCOUNT.to_string());
        }
        Ok(inspection)
    }

    fn finding(&self, target: &String) -> Finding {
        Finding::new(Pillar::IdentityMfa, ResourceKind::Account, target.clone(), Severity::Critical)
    }
}
