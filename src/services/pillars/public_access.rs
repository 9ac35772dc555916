use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::services::clients::StorageClient;
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::PublicAccessBlock;
use crate::services::pillars::{Inspection, Inspector, Remediator};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

/// Buckets whose public access block is missing or has any guard switched off.
pub struct PublicAccessPillar {
    client: Arc<dyn StorageClient>,
}

impl PublicAccessPillar {
    pub fn new(client: Arc<dyn StorageClient>) -> Self {
        Self { client }
    }
}

/// `Ok(true)` when the bucket can be exposed publicly. A missing configuration
/// counts as exposed; every other client error is returned as is.
pub async fn is_publicly_exposed(client: &dyn StorageClient, bucket: &str) -> Result<bool, ClientError> {
    match client.get_public_access_block(bucket).await {
        Ok(configuration) => Ok(!configuration.is_fully_blocked()),
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl Inspector for PublicAccessPillar {
    type Target = String;

    fn pillar(&self) -> Pillar {
        Pillar::PublicAccess
    }

    async fn inspect(&self) -> Result<Inspection<String>, ClientError> {
        let mut inspection = Inspection::new();
        for bucket in self.client.list_buckets().await? {
            match is_publicly_exposed(self.client.as_ref(), &bucket).await {
                Ok(true) => inspection.targets.push(bucket),
                Ok(false) => debug!(bucket = bucket.as_str(); "Public access fully blocked"),
                Err(e) if e.is_access_denied() => {
                    debug!(bucket = bucket.as_str(); "Skipping bucket, public access block cannot be read")
                }
                Err(e) => {
                    warn!(bucket = bucket.as_str(); "Failed to read public access block: {}", e);
                    inspection.errors.push(format!("{}: {}", bucket, e));
                }
            }
        }
        Ok(inspection)
    }

    fn finding(&self, target: &String) -> Finding {
        Finding::new(Pillar::PublicAccess, ResourceKind::Bucket, target.clone(), Severity::Critical)
    }
}

#[async_trait]
impl Remediator for PublicAccessPillar {
    /// Sets all four guards unconditionally, so repeating it converges.
    async fn remediate(&self, target: &String) -> Result<(), ClientError> {
        self.client
            .put_public_access_block(target, PublicAccessBlock::fully_blocked())
            .await
    }
}
