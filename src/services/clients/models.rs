use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Protocol value a provider uses for "all traffic".
pub const ALL_TRAFFIC_PROTOCOL: &str = "-1";

/// Summary attribute holding the root account MFA flag.
pub const ACCOUNT_MFA_ENABLED: &str = "AccountMFAEnabled";

/// Table encryption status that marks a table as unencrypted.
pub const SSE_STATUS_DISABLED: &str = "DISABLED";

/// Account-level identity summary: attribute name to integer flag or counter.
pub type AccountSummary = HashMap<String, i64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionConfiguration {
    pub sse_algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

impl EncryptionConfiguration {
    /// Provider-managed encryption with no customer-supplied key.
    pub fn provider_managed(algorithm: &str) -> Self {
        Self {
            sse_algorithm: algorithm.to_string(),
            kms_key_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccessBlock {
    pub block_public_acls: bool,
    pub ignore_public_acls: bool,
    pub block_public_policy: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlock {
    pub fn fully_blocked() -> Self {
        Self {
            block_public_acls: true,
            ignore_public_acls: true,
            block_public_policy: true,
            restrict_public_buckets: true,
        }
    }

    /// All four guards must hold.
    pub fn is_fully_blocked(&self) -> bool {
        self.block_public_acls && self.ignore_public_acls && self.block_public_policy && self.restrict_public_buckets
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbInstance {
    pub identifier: String,
    pub storage_encrypted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescription {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sse_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressRule {
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_port: Option<i32>,
    #[serde(default)]
    pub ipv4_ranges: Vec<String>,
    #[serde(default)]
    pub ipv6_ranges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroup {
    pub group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default)]
    pub ingress: Vec<IngressRule>,
}
