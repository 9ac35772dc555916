use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::services::clients::StorageClient;
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::EncryptionConfiguration;
use crate::services::pillars::{Inspection, Inspector, Remediator};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

/// Buckets without a default server-side encryption configuration.
pub struct StorageEncryptionPillar {
    client: Arc<dyn StorageClient>,
    sse_algorithm: String,
}

impl StorageEncryptionPillar {
    pub fn new(client: Arc<dyn StorageClient>, sse_algorithm: String) -> Self {
        Self { client, sse_algorithm }
    }
}

#[async_trait]
impl Inspector for StorageEncryptionPillar {
    type Target = String;

    fn pillar(&self) -> Pillar {
        Pillar::StorageEncryption
    }

    async fn inspect(&self) -> Result<Inspection<String>, ClientError> {
        let mut inspection = Inspection::new();
        for bucket in self.client.list_buckets().await? {
            match self.client.get_bucket_encryption(&bucket).await {
                Ok(_) => debug!(bucket = bucket.as_str(); "Bucket is encrypted"),
                Err(e) if e.is_not_found() => inspection.targets.push(bucket),
                Err(e) if e.is_access_denied() => {
                    debug!(bucket = bucket.as_str(); "Skipping bucket, encryption state cannot be read")
                }
                Err(e) => {
                    warn!(bucket = bucket.as_str(); "Failed to read bucket encryption: {}", e);
                    inspection.errors.push(format!("{}: {}", bucket, e));
                }
            }
        }
        Ok(inspection)
    }

    fn finding(&self, target: &String) -> Finding {
        Finding::new(
            Pillar::StorageEncryption,
            ResourceKind::Bucket,
            target.clone(),
            Severity::Warning,
        )
    }
}

#[async_trait]
impl Remediator for StorageEncryptionPillar {
    async fn remediate(&self, target: &String) -> Result<(), ClientError> {
        let configuration = EncryptionConfiguration::provider_managed(&self.sse_algorithm);
        self.client.put_bucket_encryption(target, configuration).await
    }
}
