
use crate::contracts::validation_result::ValidationResult;
use crate::services::clients::StorageClient;
use crate::services::pillars::public_access::is_publicly_exposed;
use log::{info, warn};
use std::sync::Arc;

/// Re-checks one bucket's public access block right before it is remediated,
/// so stale or replayed trigger events do not cause a mutation.
pub struct PublicAccessValidator {
    client: Arc<dyn StorageClient>,
}

impl PublicAccessValidator {
    pub fn new(client: Arc<dyn StorageClient>) -> Self {
        Self { client }
    }

    /// Any error other than a missing configuration yields `is_noncompliant = false`.
    pub async fn validate(&self, resource_id: &str) -> ValidationResult {
        if resource_id.trim().is_empty() {
            warn!("Validation requested without a bucket name");
            return ValidationResult::inconclusive(resource_id, "No bucket name found".to_string());
        }

        match is_publicly_exposed(self.client.as_ref(), resource_id).await {
            Ok(true) => {
                warn!(bucket = resource_id; "Bucket public access block is missing or weakened");
                ValidationResult::noncompliant(resource_id)
            }
            Ok(false) => {
                info!(bucket = resource_id; "Bucket public access is fully blocked");
                ValidationResult::compliant(resource_id)
            }
            Err(e) => {
                warn!(bucket = resource_id; "Could not validate bucket: {}", e);
                ValidationResult::inconclusive(resource_id, e.to_string())
            }
        }
    }
}
