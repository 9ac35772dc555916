pub mod account_clients;
pub mod client_error;
pub mod models;

use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::{
    AccountSummary, DbInstance, EncryptionConfiguration, IngressRule, PublicAccessBlock, SecurityGroup,
    TableDescription,
};
use async_trait::async_trait;

#[async_trait]
/// Inspects and mutates bucket-like storage resources
pub trait StorageClient: Send + Sync {
    /// Lists bucket names in provider order
    async fn list_buckets(&self) -> Result<Vec<String>, ClientError>;

    /// Fails with `ClientError::NotFound` when the bucket has no encryption configuration
    async fn get_bucket_encryption(&self, bucket: &str) -> Result<EncryptionConfiguration, ClientError>;

    async fn put_bucket_encryption(
        &self,
        bucket: &str,
        configuration: EncryptionConfiguration,
    ) -> Result<(), ClientError>;

    /// Fails with `ClientError::NotFound` when the bucket has no public access block
    async fn get_public_access_block(&self, bucket: &str) -> Result<PublicAccessBlock, ClientError>;

    async fn put_public_access_block(&self, bucket: &str, configuration: PublicAccessBlock) -> Result<(), ClientError>;
}

#[async_trait]
/// Read-only access to relational instances and key-value tables
pub trait DatabaseClient: Send + Sync {
    async fn list_db_instances(&self) -> Result<Vec<DbInstance>, ClientError>;

    async fn list_tables(&self) -> Result<Vec<String>, ClientError>;

    async fn describe_table(&self, name: &str) -> Result<TableDescription, ClientError>;
}

#[async_trait]
/// Read-only access to the account identity summary
pub trait IdentityClient: Send + Sync {
    async fn get_account_summary(&self) -> Result<AccountSummary, ClientError>;
}

#[async_trait]
/// Inspects security groups and revokes individual ingress rules
pub trait NetworkClient: Send + Sync {
    async fn describe_security_groups(&self) -> Result<Vec<SecurityGroup>, ClientError>;

    /// Revokes exactly the given rule from the group
    async fn revoke_ingress(&self, group_id: &str, rule: &IngressRule) -> Result<(), ClientError>;
}
