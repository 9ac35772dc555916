use crate::contracts::audit_record::AuditStatus;
use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::contracts::mode::{Mode, PillarPolicy};
use crate::contracts::pillar_outcome::PillarOutcome;
use crate::services::report::{render_list, synthesize};
use serde_json::{Value, json};

fn outcome(pillar: Pillar, policy: PillarPolicy, kind: ResourceKind, severity: Severity, ids: &[&str]) -> PillarOutcome {
    let mut outcome = PillarOutcome::new(pillar, policy);
    outcome.findings = ids
        .iter()
        .map(|id| {
            let finding = Finding::new(pillar, kind, id.to_string(), severity);
            if policy == PillarPolicy::Remediate {
                finding.remediated()
            } else {
                finding
            }
        })
        .collect();
    outcome
}

fn clean(pillar: Pillar, policy: PillarPolicy) -> PillarOutcome {
    PillarOutcome::new(pillar, policy)
}

fn all_clean(mode: Mode) -> Vec<PillarOutcome> {
    [
        Pillar::StorageEncryption,
        Pillar::DatabaseEncryption,
        Pillar::NetworkIngress,
        Pillar::IdentityMfa,
        Pillar::PublicAccess,
    ]
    .into_iter()
    .map(|p| clean(p, mode.policy_for(p)))
    .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_render_list_truncates() {
    assert_eq!(render_list(&strings(&["a", "b", "c", "d", "e"]), 3), "a, b, c (+2)");
    assert_eq!(render_list(&strings(&["a", "b", "c"]), 3), "a, b, c");
    assert_eq!(render_list(&strings(&["a"]), 3), "a");
}

#[test]
fn test_secure_scan() {
    let report = synthesize(Mode::Scan, &all_clean(Mode::Scan), 3);

    assert_eq!(report.details, "[SCAN] All Systems Secure.");
    assert_eq!(report.status, AuditStatus::Success);
    assert_eq!(report.metrics["root_mfa_secure"], json!(true));
    assert_eq!(report.metrics["open_sgs"], json!([]));
    assert_eq!(report.metrics["unencrypted_count"], json!(0));
    assert!(!report.metrics.contains_key("pillar_errors"));
}

#[test]
fn test_secure_remediation_keeps_tag() {
    let report = synthesize(Mode::RemediateAll, &all_clean(Mode::RemediateAll), 3);

    assert_eq!(report.details, "[REMEDIATION-ALL] All Systems Secure.");
    assert_eq!(report.status, AuditStatus::Success);
}

#[test]
fn test_sections_follow_fixed_order() {
    let mut db = outcome(
        Pillar::DatabaseEncryption,
        PillarPolicy::ScanOnly,
        ResourceKind::DbInstance,
        Severity::Critical,
        &["orders-db"],
    );
    db.findings.push(Finding::new(
        Pillar::DatabaseEncryption,
        ResourceKind::Table,
        "sessions".to_string(),
        Severity::Warning,
    ));
    let outcomes = vec![
        outcome(
            Pillar::StorageEncryption,
            PillarPolicy::ScanOnly,
            ResourceKind::Bucket,
            Severity::Warning,
            &["b1", "b2", "b3", "b4"],
        ),
        db,
        outcome(
            Pillar::NetworkIngress,
            PillarPolicy::ScanOnly,
            ResourceKind::SecurityGroup,
            Severity::Critical,
            &["sg-1 (web)"],
        ),
        outcome(
            Pillar::IdentityMfa,
            PillarPolicy::ScanOnly,
            ResourceKind::Account,
            Severity::Critical,
            &["root-account"],
        ),
        outcome(
            Pillar::PublicAccess,
            PillarPolicy::ScanOnly,
            ResourceKind::Bucket,
            Severity::Critical,
            &["b2"],
        ),
    ];

    let report = synthesize(Mode::Scan, &outcomes, 3);

    assert_eq!(
        report.details,
        "[SCAN] WARNING: Unencrypted buckets: b1, b2, b3 (+1) \
         | CRITICAL: Unencrypted RDS instances: orders-db \
         | WARNING: Unencrypted DynamoDB tables: sessions \
         | CRITICAL: Open SSH/all-traffic ingress: sg-1 (web) \
         | CRITICAL: Root account MFA disabled \
         | CRITICAL: Public buckets: b2"
    );
    assert_eq!(report.status, AuditStatus::Warning);
    assert_eq!(report.metrics["unencrypted_count"], json!(4));
    assert_eq!(report.metrics["unencrypted_rds"], json!(1));
    assert_eq!(report.metrics["unencrypted_dynamo"], json!(1));
    assert_eq!(report.metrics["open_sgs"], json!(["sg-1 (web)"]));
    assert_eq!(report.metrics["root_mfa_secure"], json!(false));
    assert_eq!(report.metrics["public_buckets"], json!(["b2"]));
}

#[test]
fn test_table_gaps_alone_do_not_warn() {
    let mut outcomes = all_clean(Mode::Scan);
    outcomes[1] = outcome(
        Pillar::DatabaseEncryption,
        PillarPolicy::ScanOnly,
        ResourceKind::Table,
        Severity::Warning,
        &["sessions"],
    );

    let report = synthesize(Mode::Scan, &outcomes, 3);

    assert_eq!(report.details, "[SCAN] WARNING: Unencrypted DynamoDB tables: sessions");
    assert_eq!(report.status, AuditStatus::Success);
}

#[test]
fn test_remediation_reports_fixed_and_succeeds() {
    let mut outcomes = all_clean(Mode::RemediateEncryption);
    outcomes[0] = outcome(
        Pillar::StorageEncryption,
        PillarPolicy::Remediate,
        ResourceKind::Bucket,
        Severity::Warning,
        &["b1"],
    );
    outcomes[2] = outcome(
        Pillar::NetworkIngress,
        PillarPolicy::ScanOnly,
        ResourceKind::SecurityGroup,
        Severity::Critical,
        &["sg-1 (web)"],
    );

    let report = synthesize(Mode::RemediateEncryption, &outcomes, 3);

    assert_eq!(
        report.details,
        "[REMEDIATION-ENCRYPTION] FIXED: Encrypted buckets: b1 | CRITICAL: Open SSH/all-traffic ingress: sg-1 (web)"
    );
    assert_eq!(report.status, AuditStatus::Success);
    assert_eq!(report.metrics["fixed_count"], json!(1));
    assert_eq!(report.metrics["unencrypted_count"], json!(0));
}

#[test]
fn test_errors_are_surfaced_in_metrics() {
    let mut outcomes = all_clean(Mode::Scan);
    outcomes[0] = PillarOutcome::failed(
        Pillar::StorageEncryption,
        PillarPolicy::ScanOnly,
        "listing failed".to_string(),
    );
    outcomes[3] = PillarOutcome::failed(Pillar::IdentityMfa, PillarPolicy::ScanOnly, "denied".to_string());

    let report = synthesize(Mode::Scan, &outcomes, 3);

    assert_eq!(report.details, "[SCAN] All Systems Secure.");
    assert_eq!(report.metrics["root_mfa_secure"], Value::Null);
    assert_eq!(
        report.metrics["pillar_errors"],
        json!(["storage_encryption: listing failed", "identity_mfa: denied"])
    );
}

#[test]
fn test_duplicate_identifiers_listed_once() {
    let mut outcomes = all_clean(Mode::Scan);
    outcomes[2] = outcome(
        Pillar::NetworkIngress,
        PillarPolicy::ScanOnly,
        ResourceKind::SecurityGroup,
        Severity::Critical,
        &["sg-1 (web)", "sg-1 (web)", "sg-2 (?)"],
    );

    let report = synthesize(Mode::Scan, &outcomes, 3);

    assert_eq!(
        report.details,
        "[SCAN] CRITICAL: Open SSH/all-traffic ingress: sg-1 (web), sg-2 (?)"
    );
    assert_eq!(report.metrics["open_sgs"], json!(["sg-1 (web)", "sg-2 (?)"]));
}

#[test]
fn test_render_list_keeps_at_least_one_identifier() {
    assert_eq!(render_list(&strings(&["a", "b"]), 0), "a (+1)");
}

#[test]
fn test_zero_limit_still_names_a_resource() {
    let mut outcomes = all_clean(Mode::Scan);
    outcomes[4] = outcome(
        Pillar::PublicAccess,
        PillarPolicy::ScanOnly,
        ResourceKind::Bucket,
        Severity::Critical,
        &["b1", "b2"],
    );

    let report = synthesize(Mode::Scan, &outcomes, 0);

    assert_eq!(report.details, "[SCAN] CRITICAL: Public buckets: b1 (+1)");
}

#[test]
fn test_section_tag_follows_finding_severity() {
    let mut outcomes = all_clean(Mode::Scan);
    outcomes[0] = outcome(
        Pillar::StorageEncryption,
        PillarPolicy::ScanOnly,
        ResourceKind::Bucket,
        Severity::Warning,
        &["b1"],
    );
    outcomes[0].findings.push(Finding::new(
        Pillar::StorageEncryption,
        ResourceKind::Bucket,
        "b2".to_string(),
        Severity::Critical,
    ));

    let report = synthesize(Mode::Scan, &outcomes, 3);

    assert_eq!(report.details, "[SCAN] CRITICAL: Unencrypted buckets: b1, b2");
}

#[test]
fn test_fixed_tag_comes_from_remediated_flag() {
    let mut outcomes = all_clean(Mode::RemediateNetwork);
    outcomes[2] = outcome(
        Pillar::NetworkIngress,
        PillarPolicy::Remediate,
        ResourceKind::SecurityGroup,
        Severity::Critical,
        &["sg-1 (web)"],
    );
    outcomes[2].findings.push(Finding::new(
        Pillar::NetworkIngress,
        ResourceKind::SecurityGroup,
        "sg-2 (?)".to_string(),
        Severity::Critical,
    ));

    let report = synthesize(Mode::RemediateNetwork, &outcomes, 3);

    assert_eq!(
        report.details,
        "[REMEDIATION-NETWORK] CRITICAL: Open SSH/all-traffic ingress: sg-2 (?) | FIXED: Revoked open ingress: sg-1 (web)"
    );
    assert_eq!(report.metrics["fixed_sgs"], json!(["sg-1 (web)"]));
    assert_eq!(report.metrics["open_sgs"], json!(["sg-2 (?)"]));
}
