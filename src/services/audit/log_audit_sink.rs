use crate::contracts::audit_record::AuditRecord;
use crate::services::audit::AuditSink;
use anyhow::Result;

#[derive(Default)]
pub struct LogAuditSink;

impl LogAuditSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl AuditSink for LogAuditSink {
    fn record(&self, record: &AuditRecord) -> Result<()> {
        let timestamp = record.timestamp_iso();
        let meta = serde_json::to_string(record.metrics())?;

        log::info!(
            // Indicates the audit events for easier filtering in log aggregation systems
            log_type = "audit",

            // The record decomposition for structured logging
            log_id = record.id(),
            timestamp = timestamp.as_str(),
            event_name = record.event_name(),
            status = record.status().as_str(),
            category = record.category().as_str(),
            bucket_name = record.bucket_name().unwrap_or_default(),
            meta = meta.as_str();

            // The log message
            "{}", record.details());

        Ok(())
    }
}
