
use crate::contracts::audit_record::AuditRecord;
use crate::services::audit::AuditSink;
use anyhow::{Result, anyhow};
use std::sync::RwLock;

/// Keeps records in process; mainly for tests and local runs.
#[derive(Default)]
pub struct MemoryAuditStore {
    records: RwLock<Vec<AuditRecord>>,
}

impl MemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        let read_guard = self.records.read().map_err(|_| anyhow!("Audit store lock poisoned"))?;
        Ok(read_guard.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<AuditRecord>> {
        let read_guard = self.records.read().map_err(|_| anyhow!("Audit store lock poisoned"))?;
        let mut records = read_guard.clone();
        records.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        records.truncate(limit);
        Ok(records)
    }
}

impl AuditSink for MemoryAuditStore {
    fn record(&self, record: &AuditRecord) -> Result<()> {
        let mut write_guard = self.records.write().map_err(|_| anyhow!("Audit store lock poisoned"))?;
        write_guard.push(record.clone());
        Ok(())
    }
}
