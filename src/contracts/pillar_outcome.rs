use crate::contracts::finding::{Finding, Pillar};
use crate::contracts::mode::PillarPolicy;

/// What one pillar contributed to an invocation.
///
/// Under `ScanOnly` the findings are the non-compliant resources; under
/// `Remediate` they are the resources actually fixed, flagged `remediated`.
/// A resource whose fix failed appears in neither.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarOutcome {
    pub pillar: Pillar,
    pub policy: PillarPolicy,
    pub findings: Vec<Finding>,
    pub errors: Vec<String>,
}

impl PillarOutcome {
    pub fn new(pillar: Pillar, policy: PillarPolicy) -> Self {
        Self {
            pillar,
            policy,
            findings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A pillar that could not run at all: no findings, one error note.
    pub fn failed(pillar: Pillar, policy: PillarPolicy, error: String) -> Self {
        Self {
            errors: vec![error],
            ..Self::new(pillar, policy)
        }
    }

    /// Affected identifiers in encounter order, without repeats.
    pub fn items(&self) -> Vec<String> {
        unique_identifiers(&self.findings)
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }
}

/// Resource identifiers of `findings` in encounter order, each listed once.
pub fn unique_identifiers<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for finding in findings {
        if !items.contains(&finding.resource_id) {
            items.push(finding.resource_id.clone());
        }
    }
    items
}
