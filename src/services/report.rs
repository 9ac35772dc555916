#[cfg(test)]
mod tests;

use crate::contracts::audit_record::{AuditStatus, Metrics};
use crate::contracts::finding::{Finding, Pillar, ResourceKind};
use crate::contracts::mode::Mode;
use crate::contracts::pillar_outcome::{PillarOutcome, unique_identifiers};
use maplit::btreemap;
use serde_json::{Value, json};

pub const ALL_SECURE: &str = "All Systems Secure.";
const FIXED_TAG: &str = "FIXED";
const SECTION_SEPARATOR: &str = " | ";

/// The synthesized, not yet identified, result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostureReport {
    pub status: AuditStatus,
    pub details: String,
    pub metrics: Metrics,
}

/// At most `limit` identifiers joined by ", ", the rest collapsed into `(+N)`.
/// A limit below 1 is treated as 1.
pub fn render_list(items: &[String], limit: usize) -> String {
    let limit = limit.max(1);
    let shown = items.iter().take(limit).cloned().collect::<Vec<_>>().join(", ");
    if items.len() > limit {
        format!("{} (+{})", shown, items.len() - limit)
    } else {
        shown
    }
}

pub fn synthesize(mode: Mode, outcomes: &[PillarOutcome], list_limit: usize) -> PostureReport {
    let view = OutcomeView { outcomes };
    let sections = render_sections(&view, list_limit);

    let body = if sections.is_empty() {
        ALL_SECURE.to_string()
    } else {
        sections.join(SECTION_SEPARATOR)
    };

    let metrics = build_metrics(&view);
    let status = if mode.is_scan() && view.has_scan_risk() {
        AuditStatus::Warning
    } else {
        AuditStatus::Success
    };

    PostureReport {
        status,
        details: format!("{} {}", mode.detail_tag(), body),
        metrics,
    }
}

struct OutcomeView<'a> {
    outcomes: &'a [PillarOutcome],
}

impl<'a> OutcomeView<'a> {
    fn outcome(&self, pillar: Pillar) -> Option<&'a PillarOutcome> {
        self.outcomes.iter().find(|o| o.pillar == pillar)
    }

    fn findings(&self, pillar: Pillar, remediated: bool, kind: Option<ResourceKind>) -> Vec<&'a Finding> {
        self.outcome(pillar)
            .map(|o| {
                o.findings
                    .iter()
                    .filter(|f| f.remediated == remediated && kind.is_none_or(|k| f.kind == k))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Findings a pillar reported without fixing them.
    fn found(&self, pillar: Pillar) -> Vec<&'a Finding> {
        self.findings(pillar, false, None)
    }

    fn found_of(&self, pillar: Pillar, kind: ResourceKind) -> Vec<&'a Finding> {
        self.findings(pillar, false, Some(kind))
    }

    fn fixed(&self, pillar: Pillar) -> Vec<&'a Finding> {
        self.findings(pillar, true, None)
    }

    /// `Some(false)` when MFA is missing, `None` when it could not be checked.
    fn root_mfa_secure(&self) -> Option<bool> {
        let outcome = self.outcome(Pillar::IdentityMfa)?;
        if !outcome.findings.is_empty() {
            Some(false)
        } else if outcome.errors.is_empty() {
            Some(true)
        } else {
            None
        }
    }

    fn has_scan_risk(&self) -> bool {
        !self.found(Pillar::StorageEncryption).is_empty()
            || !self.found_of(Pillar::DatabaseEncryption, ResourceKind::DbInstance).is_empty()
            || !self.found(Pillar::NetworkIngress).is_empty()
            || self.root_mfa_secure() == Some(false)
            || !self.found(Pillar::PublicAccess).is_empty()
    }

    fn errors(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .flat_map(|o| o.errors.iter().map(move |e| format!("{}: {}", o.pillar, e)))
            .collect()
    }
}

/// `FIXED` when every finding was remediated, otherwise the highest severity.
fn section_tag(findings: &[&Finding]) -> Option<&'static str> {
    if findings.is_empty() {
        return None;
    }
    if findings.iter().all(|f| f.remediated) {
        return Some(FIXED_TAG);
    }
    findings.iter().map(|f| f.severity).max().map(|s| s.tag())
}

fn section(label: &str, findings: Vec<&Finding>, limit: usize) -> Option<String> {
    let tag = section_tag(&findings)?;
    let items = unique_identifiers(findings);
    Some(format!("{}: {}: {}", tag, label, render_list(&items, limit)))
}

// Encryption, network, identity, then public access.
fn render_sections(view: &OutcomeView<'_>, limit: usize) -> Vec<String> {
    let mfa_missing =
        section_tag(&view.found(Pillar::IdentityMfa)).map(|tag| format!("{}: Root account MFA disabled", tag));

    [
        section("Unencrypted buckets", view.found(Pillar::StorageEncryption), limit),
        section("Encrypted buckets", view.fixed(Pillar::StorageEncryption), limit),
        section(
            "Unencrypted RDS instances",
            view.found_of(Pillar::DatabaseEncryption, ResourceKind::DbInstance),
            limit,
        ),
        section(
            "Unencrypted DynamoDB tables",
            view.found_of(Pillar::DatabaseEncryption, ResourceKind::Table),
            limit,
        ),
        section("Open SSH/all-traffic ingress", view.found(Pillar::NetworkIngress), limit),
        section("Revoked open ingress", view.fixed(Pillar::NetworkIngress), limit),
        mfa_missing,
        section("Public buckets", view.found(Pillar::PublicAccess), limit),
        section("Public access blocked", view.fixed(Pillar::PublicAccess), limit),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn build_metrics(view: &OutcomeView<'_>) -> Metrics {
    let root_mfa_secure = match view.root_mfa_secure() {
        Some(secure) => Value::Bool(secure),
        None => Value::Null,
    };
    let count = |findings: Vec<&Finding>| json!(unique_identifiers(findings).len());
    let list = |findings: Vec<&Finding>| json!(unique_identifiers(findings));

    let mut metrics = btreemap! {
        "unencrypted_count".to_string() => count(view.found(Pillar::StorageEncryption)),
        "fixed_count".to_string() => count(view.fixed(Pillar::StorageEncryption)),
        "unencrypted_rds".to_string() => count(view.found_of(Pillar::DatabaseEncryption, ResourceKind::DbInstance)),
        "unencrypted_dynamo".to_string() => count(view.found_of(Pillar::DatabaseEncryption, ResourceKind::Table)),
        "open_sgs".to_string() => list(view.found(Pillar::NetworkIngress)),
        "fixed_sgs".to_string() => list(view.fixed(Pillar::NetworkIngress)),
        "root_mfa_secure".to_string() => root_mfa_secure,
        "public_buckets".to_string() => list(view.found(Pillar::PublicAccess)),
        "fixed_public_buckets".to_string() => list(view.fixed(Pillar::PublicAccess)),
    };

    let errors = view.errors();
    if !errors.is_empty() {
        metrics.insert("pillar_errors".to_string(), json!(errors));
    }
    metrics
}
