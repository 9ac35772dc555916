use crate::contracts::audit_record::{AuditCategory, AuditRecord, AuditStatus};
use chrono::{TimeZone, Utc};
use maplit::btreemap;
use serde_json::json;

#[test]
fn build_generates_identity() {
    let first = AuditRecord::builder()
        .event_name("SecurityScan".to_string())
        .details("[SCAN] All Systems Secure.".to_string())
        .category(AuditCategory::Scan)
        .build()
        .unwrap();
    let second = AuditRecord::builder()
        .event_name("SecurityScan".to_string())
        .details("[SCAN] All Systems Secure.".to_string())
        .category(AuditCategory::Scan)
        .build()
        .unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.status(), AuditStatus::Success);
    assert!(first.timestamp_iso().ends_with('Z'));
}

#[test]
fn build_requires_category() {
    let result = AuditRecord::builder()
        .event_name("SecurityScan".to_string())
        .details("x".to_string())
        .build();

    assert_eq!(result.unwrap_err().to_string(), "Category is required");
}

#[test]
fn serializes_with_log_table_names() {
    let record = AuditRecord::builder()
        .id("log-1".to_string())
        .timestamp(Utc.with_ymd_and_hms(2026, 1, 15, 14, 32, 8).unwrap())
        .event_name("AutoRemediation".to_string())
        .status(AuditStatus::Warning)
        .details("[REMEDIATION-ALL] FIXED: Public access blocked: b1".to_string())
        .category(AuditCategory::Remediation)
        .metrics(btreemap! { "fixed_public_buckets".to_string() => json!(["b1"]) })
        .bucket_name("b1".to_string())
        .build()
        .unwrap();

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["LogId"], "log-1");
    assert_eq!(value["Timestamp"], "2026-01-15T14:32:08Z");
    assert_eq!(value["EventName"], "AutoRemediation");
    assert_eq!(value["Status"], "WARNING");
    assert_eq!(value["Category"], "Remediation");
    assert_eq!(value["Meta"]["fixed_public_buckets"], json!(["b1"]));
    assert_eq!(value["BucketName"], "b1");
}

#[test]
fn bucket_name_is_omitted_when_absent() {
    let record = AuditRecord::builder()
        .event_name("SecurityScan".to_string())
        .details("[SCAN] All Systems Secure.".to_string())
        .category(AuditCategory::Scan)
        .build()
        .unwrap();

    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("BucketName").is_none());
}
