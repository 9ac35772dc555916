pub mod log_audit_sink;
pub mod memory_audit_store;

use crate::contracts::audit_record::AuditRecord;
use anyhow::Result;

/// Default number of records returned by `MemoryAuditStore::recent`.
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Accepts the single audit record an invocation produces. Implementations own
/// durability and retries.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: &AuditRecord) -> Result<()>;
}
