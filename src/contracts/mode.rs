
use crate::contracts::finding::Pillar;
use log::warn;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Operator-selected run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Scan,
    RemediateAll,
    RemediateStorage,
    RemediateEncryption,
    RemediateNetwork,
}

/// Whether a pillar only reports its findings or also acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PillarPolicy {
    ScanOnly,
    Remediate,
}

impl PillarPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PillarPolicy::ScanOnly => "scan_only",
            PillarPolicy::Remediate => "remediate",
        }
    }
}

const REMEDIATE_PREFIX: &str = "remediate_";

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Scan,
        Mode::RemediateAll,
        Mode::RemediateStorage,
        Mode::RemediateEncryption,
        Mode::RemediateNetwork,
    ];

    /// Parses an operator-supplied mode. Anything unrecognized runs as `scan`,
    /// so a typo never mutates resources.
    pub fn parse(input: &str) -> Mode {
        match Mode::try_parse(input) {
            Some(mode) => mode,
            None => {
                warn!(requested_mode = input; "Unrecognized mode, falling back to scan");
                Mode::Scan
            }
        }
    }

    pub fn try_parse(input: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.as_str() == input)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Scan => "scan",
            Mode::RemediateAll => "remediate_all",
            Mode::RemediateStorage => "remediate_storage",
            Mode::RemediateEncryption => "remediate_encryption",
            Mode::RemediateNetwork => "remediate_network",
        }
    }

    pub fn is_scan(&self) -> bool {
        *self == Mode::Scan
    }

    /// The per-pillar policy table. Database encryption and identity MFA have no
    /// safe automated fix and stay scan-only in every mode.
    pub fn policy_for(&self, pillar: Pillar) -> PillarPolicy {
        let remediate = match (self, pillar) {
            (_, Pillar::DatabaseEncryption) | (_, Pillar::IdentityMfa) => false,
            (Mode::Scan, _) => false,
            (Mode::RemediateAll, _) => true,
            (Mode::RemediateStorage, Pillar::PublicAccess) => true,
            (Mode::RemediateEncryption, Pillar::StorageEncryption) => true,
            (Mode::RemediateNetwork, Pillar::NetworkIngress) => true,
            _ => false,
        };
        if remediate {
            PillarPolicy::Remediate
        } else {
            PillarPolicy::ScanOnly
        }
    }

    /// Leading tag of the audit details string, e.g. `[SCAN]` or `[REMEDIATION-NETWORK]`.
    pub fn detail_tag(&self) -> String {
        match self {
            Mode::Scan => "[SCAN]".to_string(),
            other => {
                let token = other.as_str().trim_start_matches(REMEDIATE_PREFIX).to_uppercase();
                format!("[REMEDIATION-{}]", token)
            }
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
