pub mod snapshot;

use crate::services::backends::memory::snapshot::{AccountSnapshot, BucketState};
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::{
    AccountSummary, DbInstance, EncryptionConfiguration, IngressRule, PublicAccessBlock, SecurityGroup,
    TableDescription,
};
use crate::services::clients::{DatabaseClient, IdentityClient, NetworkClient, StorageClient};
use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// A mutation the engine issued against the simulated account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationCall {
    PutBucketEncryption {
        bucket: String,
        configuration: EncryptionConfiguration,
    },
    PutPublicAccessBlock {
        bucket: String,
        configuration: PublicAccessBlock,
    },
    RevokeIngress {
        group_id: String,
        rule: IngressRule,
    },
}

/// Every client trait over one in-process account. Mutations change the state,
/// so a second run sees the effect of the first.
pub struct InMemoryAccount {
    state: RwLock<AccountSnapshot>,
    mutations: RwLock<Vec<MutationCall>>,
}

impl InMemoryAccount {
    pub fn new(snapshot: AccountSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            mutations: RwLock::new(Vec::new()),
        }
    }

    pub fn from_yaml(document: &str) -> anyhow::Result<Self> {
        Ok(Self::new(AccountSnapshot::from_yaml(document)?))
    }

    pub async fn snapshot(&self) -> AccountSnapshot {
        self.state.read().await.clone()
    }

    pub async fn mutations(&self) -> Vec<MutationCall> {
        self.mutations.read().await.clone()
    }

    pub async fn fail_operation(&self, operation: &str) {
        self.state.write().await.failing_operations.push(operation.to_string());
    }

    async fn check_operation(&self, operation: &str) -> Result<(), ClientError> {
        let read_guard = self.state.read().await;
        if read_guard.failing_operations.iter().any(|o| o == operation) {
            return Err(ClientError::Other(anyhow!("{} failed", operation)));
        }
        Ok(())
    }

    async fn read_bucket(&self, operation: &str, bucket: &str) -> Result<BucketState, ClientError> {
        self.check_operation(operation).await?;
        let read_guard = self.state.read().await;
        let state = find_bucket(&read_guard, bucket)?;
        if state.access_denied {
            return Err(ClientError::AccessDenied(bucket.to_string()));
        }
        Ok(state.clone())
    }

    async fn write_bucket<F>(&self, operation: &str, bucket: &str, apply: F) -> Result<(), ClientError>
    where
        F: FnOnce(&mut BucketState) + Send,
    {
        self.check_operation(operation).await?;
        let mut write_guard = self.state.write().await;
        let state = write_guard
            .buckets
            .iter_mut()
            .find(|b| b.name == bucket)
            .ok_or_else(|| ClientError::Other(anyhow!("No such bucket: {}", bucket)))?;
        if state.access_denied {
            return Err(ClientError::AccessDenied(bucket.to_string()));
        }
        if state.read_only {
            return Err(ClientError::Other(anyhow!("Bucket {} rejected the update", bucket)));
        }
        apply(state);
        Ok(())
    }

    async fn record(&self, call: MutationCall) {
        self.mutations.write().await.push(call);
    }
}

fn find_bucket<'a>(snapshot: &'a AccountSnapshot, bucket: &str) -> Result<&'a BucketState, ClientError> {
    snapshot
        .buckets
        .iter()
        .find(|b| b.name == bucket)
        .ok_or_else(|| ClientError::Other(anyhow!("No such bucket: {}", bucket)))
}

#[async_trait]
impl StorageClient for InMemoryAccount {
    async fn list_buckets(&self) -> Result<Vec<String>, ClientError> {
        self.check_operation("list_buckets").await?;
        let read_guard = self.state.read().await;
        Ok(read_guard.buckets.iter().map(|b| b.name.clone()).collect())
    }

    async fn get_bucket_encryption(&self, bucket: &str) -> Result<EncryptionConfiguration, ClientError> {
        let state = self.read_bucket("get_bucket_encryption", bucket).await?;
        state
            .encryption
            .ok_or_else(|| ClientError::not_found(bucket, "ServerSideEncryptionConfiguration"))
    }

    async fn put_bucket_encryption(
        &self,
        bucket: &str,
        configuration: EncryptionConfiguration,
    ) -> Result<(), ClientError> {
        self.record(MutationCall::PutBucketEncryption {
            bucket: bucket.to_string(),
            configuration: configuration.clone(),
        })
        .await;
        self.write_bucket("put_bucket_encryption", bucket, |state| {
            state.encryption = Some(configuration)
        })
        .await
    }

    async fn get_public_access_block(&self, bucket: &str) -> Result<PublicAccessBlock, ClientError> {
        let state = self.read_bucket("get_public_access_block", bucket).await?;
        state
            .public_access_block
            .ok_or_else(|| ClientError::not_found(bucket, "PublicAccessBlockConfiguration"))
    }

    async fn put_public_access_block(&self, bucket: &str, configuration: PublicAccessBlock) -> Result<(), ClientError> {
        self.record(MutationCall::PutPublicAccessBlock {
            bucket: bucket.to_string(),
            configuration,
        })
        .await;
        self.write_bucket("put_public_access_block", bucket, |state| {
            state.public_access_block = Some(configuration)
        })
        .await
    }
}

#[async_trait]
impl DatabaseClient for InMemoryAccount {
    async fn list_db_instances(&self) -> Result<Vec<DbInstance>, ClientError> {
        self.check_operation("list_db_instances").await?;
        Ok(self.state.read().await.db_instances.clone())
    }

    async fn list_tables(&self) -> Result<Vec<String>, ClientError> {
        self.check_operation("list_tables").await?;
        let read_guard = self.state.read().await;
        Ok(read_guard.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn describe_table(&self, name: &str) -> Result<TableDescription, ClientError> {
        self.check_operation("describe_table").await?;
        let read_guard = self.state.read().await;
        read_guard
            .tables
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| ClientError::not_found(name, "Table"))
    }
}

#[async_trait]
impl IdentityClient for InMemoryAccount {
    async fn get_account_summary(&self) -> Result<AccountSummary, ClientError> {
        self.check_operation("get_account_summary").await?;
        Ok(self.state.read().await.account_summary.clone())
    }
}

#[async_trait]
impl NetworkClient for InMemoryAccount {
    async fn describe_security_groups(&self) -> Result<Vec<SecurityGroup>, ClientError> {
        self.check_operation("describe_security_groups").await?;
        Ok(self.state.read().await.security_groups.clone())
    }

    /// Revoking a rule that is already gone succeeds without changes.
    async fn revoke_ingress(&self, group_id: &str, rule: &IngressRule) -> Result<(), ClientError> {
        self.record(MutationCall::RevokeIngress {
            group_id: group_id.to_string(),
            rule: rule.clone(),
        })
        .await;
        self.check_operation("revoke_ingress").await?;
        let mut write_guard = self.state.write().await;
        let group = write_guard
            .security_groups
            .iter_mut()
            .find(|g| g.group_id == group_id)
            .ok_or_else(|| ClientError::not_found(group_id, "SecurityGroup"))?;
        group.ingress.retain(|existing| existing != rule);
        Ok(())
    }
}
