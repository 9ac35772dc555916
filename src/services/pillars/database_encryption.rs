use crate::contracts::finding::{Finding, Pillar, ResourceKind, Severity};
use crate::services::clients::DatabaseClient;
use crate::services::clients::client_error::ClientError;
use crate::services::clients::models::SSE_STATUS_DISABLED;
use crate::services::pillars::{Inspection, Inspector};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

/// An unencrypted database resource. Fixing either kind needs a rebuild of the
/// resource, so this pillar only ever reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseGap {
    Instance(String),
    Table(String),
}

pub struct DatabaseEncryptionPillar {
    client: Arc<dyn DatabaseClient>,
}

impl DatabaseEncryptionPillar {
    pub fn new(client: Arc<dyn DatabaseClient>) -> Self {
        Self { client }
    }

    async fn inspect_instances(&self, inspection: &mut Inspection<DatabaseGap>) {
        match self.client.list_db_instances().await {
            Ok(instances) => {
                for instance in instances.into_iter().filter(|i| !i.storage_encrypted) {
                    inspection.targets.push(DatabaseGap::Instance(instance.identifier));
                }
            }
            Err(e) => {
                warn!("Failed to list database instances: {}", e);
                inspection.errors.push(format!("db instances: {}", e));
            }
        }
    }

    async fn inspect_tables(&self, inspection: &mut Inspection<DatabaseGap>) {
        let tables = match self.client.list_tables().await {
            Ok(tables) => tables,
            Err(e) => {
                warn!("Failed to list tables: {}", e);
                inspection.errors.push(format!("tables: {}", e));
                return;
            }
        };

        for table in tables {
            match self.client.describe_table(&table).await {
                // A table with no reported status uses the provider's default encryption.
                Ok(description) if description.sse_status.as_deref() == Some(SSE_STATUS_DISABLED) => {
                    inspection.targets.push(DatabaseGap::Table(table))
                }
                Ok(_) => {}
                Err(e) if e.is_access_denied() => debug!(table = table.as_str(); "Skipping table, cannot describe"),
                Err(e) => {
                    warn!(table = table.as_str(); "Failed to describe table: {}", e);
                    inspection.errors.push(format!("{}: {}", table, e));
                }
            }
        }
    }
}

#[async_trait]
impl Inspector for DatabaseEncryptionPillar {
    type Target = DatabaseGap;

    fn pillar(&self) -> Pillar {
        Pillar::DatabaseEncryption
    }

    /// Instances and tables are checked independently; a failure listing one
    /// kind is recorded and the other is still inspected.
    async fn inspect(&self) -> Result<Inspection<DatabaseGap>, ClientError> {
        let mut inspection = Inspection::new();
        self.inspect_instances(&mut inspection).await;
        self.inspect_tables(&mut inspection).await;
        Ok(inspection)
    }

    fn finding(&self, target: &DatabaseGap) -> Finding {
        match target {
            DatabaseGap::Instance(id) => Finding::new(
                Pillar::DatabaseEncryption,
                ResourceKind::DbInstance,
                id.clone(),
                Severity::Critical,
            ),
            DatabaseGap::Table(name) => Finding::new(
                Pillar::DatabaseEncryption,
                ResourceKind::Table,
                name.clone(),
                Severity::Warning,
            ),
        }
    }
}
