use crate::configuration::models::engine_settings::EngineSettings;
use crate::contracts::audit_record::{AuditCategory, AuditStatus};
use crate::services::backends::memory::{InMemoryAccount, MutationCall};
use crate::services::clients::models::PublicAccessBlock;
use crate::services::targeted_remediation::TargetedRemediation;
use crate::testing::EXPOSED_ACCOUNT;
use serde_json::json;
use std::sync::Arc;

fn setup() -> (Arc<InMemoryAccount>, TargetedRemediation) {
    let account = Arc::new(InMemoryAccount::from_yaml(EXPOSED_ACCOUNT).unwrap());
    let remediation = TargetedRemediation::new(account.clone(), EngineSettings::default());
    (account, remediation)
}

#[tokio::test]
async fn test_exposed_bucket_is_blocked() {
    let (account, remediation) = setup();

    let record = remediation.remediate("public-assets").await.unwrap();

    assert_eq!(record.status(), AuditStatus::Success);
    assert_eq!(record.category(), AuditCategory::Remediation);
    assert_eq!(record.event_name(), "EventDrivenRemediation");
    assert_eq!(
        record.details(),
        "[REMEDIATION-PUBLIC-ACCESS] FIXED: Public access blocked: public-assets"
    );
    assert_eq!(record.bucket_name(), Some("public-assets"));
    assert_eq!(record.metric("action"), Some(&json!("remediated")));
    assert_eq!(
        account.mutations().await,
        vec![MutationCall::PutPublicAccessBlock {
            bucket: "public-assets".to_string(),
            configuration: PublicAccessBlock::fully_blocked(),
        }]
    );
}

#[tokio::test]
async fn test_replayed_event_is_a_no_op() {
    let (account, remediation) = setup();

    remediation.remediate("data-lake").await.unwrap();
    let second = remediation.remediate("data-lake").await.unwrap();

    assert_eq!(second.metric("action"), Some(&json!("already_compliant")));
    assert_eq!(second.metric("is_noncompliant"), Some(&json!(false)));
    assert_eq!(account.mutations().await.len(), 1);
}

#[tokio::test]
async fn test_inconclusive_validation_skips_mutation() {
    let (account, remediation) = setup();

    let record = remediation.remediate("restricted-bucket").await.unwrap();

    assert_eq!(record.status(), AuditStatus::Warning);
    assert_eq!(record.metric("action"), Some(&json!("skipped")));
    assert!(account.mutations().await.is_empty());
}

#[tokio::test]
async fn test_failed_put_is_reported() {
    let (account, remediation) = setup();
    account.fail_operation("put_public_access_block").await;

    let record = remediation.remediate("public-assets").await.unwrap();

    assert_eq!(record.status(), AuditStatus::Warning);
    assert_eq!(record.metric("action"), Some(&json!("failed")));
    assert!(record.details().starts_with("[REMEDIATION-PUBLIC-ACCESS] Remediation failed for public-assets"));
}
