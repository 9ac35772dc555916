use crate::services::clients::models::{
    AccountSummary, DbInstance, EncryptionConfiguration, PublicAccessBlock, SecurityGroup, TableDescription,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Simulated state of one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketState {
    pub name: String,
    #[serde(default)]
    pub encryption: Option<EncryptionConfiguration>,
    #[serde(default)]
    pub public_access_block: Option<PublicAccessBlock>,
    /// Every call touching this bucket answers with access denied.
    #[serde(default)]
    pub access_denied: bool,
    /// Reads succeed, writes fail.
    #[serde(default)]
    pub read_only: bool,
}

impl BucketState {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            encryption: None,
            public_access_block: None,
            access_denied: false,
            read_only: false,
        }
    }
}

/// The full simulated account, loadable from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSnapshot {
    pub buckets: Vec<BucketState>,
    pub db_instances: Vec<DbInstance>,
    pub tables: Vec<TableDescription>,
    pub account_summary: AccountSummary,
    pub security_groups: Vec<SecurityGroup>,
    /// Client operations (by method name) that fail outright, e.g. `list_buckets`.
    pub failing_operations: Vec<String>,
}

impl AccountSnapshot {
    pub fn from_yaml(document: &str) -> anyhow::Result<Self> {
        serde_yml::from_str(document).context("Invalid account snapshot")
    }
}
