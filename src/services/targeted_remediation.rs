#[cfg(test)]
mod tests;

use crate::configuration::models::engine_settings::EngineSettings;
use crate::contracts::audit_record::{AuditCategory, AuditRecord, AuditStatus};
use crate::services::clients::StorageClient;
use crate::services::clients::models::PublicAccessBlock;
use crate::services::validator::PublicAccessValidator;
use log::{info, warn};
use maplit::btreemap;
use serde_json::json;
use std::sync::Arc;

const DETAIL_TAG: &str = "[REMEDIATION-PUBLIC-ACCESS]";

/// The event-driven path for a single bucket: validate, then block public
/// access only if the bucket is still exposed.
pub struct TargetedRemediation {
    validator: PublicAccessValidator,
    client: Arc<dyn StorageClient>,
    settings: EngineSettings,
}

impl TargetedRemediation {
    pub fn new(client: Arc<dyn StorageClient>, settings: EngineSettings) -> Self {
        Self {
            validator: PublicAccessValidator::new(client.clone()),
            client,
            settings,
        }
    }

    pub async fn remediate(&self, resource_id: &str) -> anyhow::Result<AuditRecord> {
        let validation = self.validator.validate(resource_id).await;

        let (status, action, details) = match (&validation.error, validation.is_noncompliant) {
            (Some(error), _) => (
                AuditStatus::Warning,
                "skipped",
                format!("Validation failed for {}: {}", resource_id, error),
            ),
            (None, false) => (
                AuditStatus::Success,
                "already_compliant",
                format!("No action: {} already blocks public access", resource_id),
            ),
            (None, true) => {
                match self
                    .client
                    .put_public_access_block(resource_id, PublicAccessBlock::fully_blocked())
                    .await
                {
                    Ok(()) => {
                        info!(bucket = resource_id; "Public access block applied");
                        (
                            AuditStatus::Success,
                            "remediated",
                            format!("FIXED: Public access blocked: {}", resource_id),
                        )
                    }
                    Err(e) => {
                        warn!(bucket = resource_id; "Public access block failed: {}", e);
                        (
                            AuditStatus::Warning,
                            "failed",
                            format!("Remediation failed for {}: {}", resource_id, e),
                        )
                    }
                }
            }
        };

        AuditRecord::builder()
            .event_name(self.settings.targeted_event_name.clone())
            .status(status)
            .details(format!("{} {}", DETAIL_TAG, details))
            .category(AuditCategory::Remediation)
            .metrics(btreemap! {
                "action".to_string() => json!(action),
                "is_noncompliant".to_string() => json!(validation.is_noncompliant),
            })
            .bucket_name(resource_id.to_string())
            .build()
    }
}
