use serde::Serialize;
use std::fmt::{Display, Formatter};

/// An independently evaluable security dimension of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pillar {
    StorageEncryption,
    PublicAccess,
    DatabaseEncryption,
    IdentityMfa,
    NetworkIngress,
}

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::StorageEncryption => "storage_encryption",
            Pillar::PublicAccess => "public_access",
            Pillar::DatabaseEncryption => "database_encryption",
            Pillar::IdentityMfa => "identity_mfa",
            Pillar::NetworkIngress => "network_ingress",
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

/// The kind of resource a finding points at. The database pillar reports two
/// kinds with different severities, so the report groups on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    Bucket,
    DbInstance,
    Table,
    Account,
    SecurityGroup,
}

/// A single non-compliant condition on one resource, scoped to one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub pillar: Pillar,
    pub kind: ResourceKind,
    pub resource_id: String,
    pub severity: Severity,
    pub remediated: bool,
}

impl Finding {
    pub fn new(pillar: Pillar, kind: ResourceKind, resource_id: String, severity: Severity) -> Self {
        Self {
            pillar,
            kind,
            resource_id,
            severity,
            remediated: false,
        }
    }

    pub fn remediated(mut self) -> Self {
        self.remediated = true;
        self
    }
}
