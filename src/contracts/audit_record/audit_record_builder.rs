use crate::contracts::audit_record::{AuditCategory, AuditRecord, AuditStatus, Metrics};
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct AuditRecordBuilder {
    id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    event_name: Option<String>,
    status: AuditStatus,
    details: Option<String>,
    category: Option<AuditCategory>,
    metrics: Metrics,
    bucket_name: Option<String>,
}

impl AuditRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            timestamp: None,
            event_name: None,
            status: AuditStatus::Success,
            details: None,
            category: None,
            metrics: Metrics::new(),
            bucket_name: None,
        }
    }

    pub fn id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn event_name(mut self, event_name: String) -> Self {
        self.event_name = Some(event_name);
        self
    }

    pub fn status(mut self, status: AuditStatus) -> Self {
        self.status = status;
        self
    }

    pub fn details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    pub fn category(mut self, category: AuditCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn bucket_name(mut self, bucket_name: String) -> Self {
        self.bucket_name = Some(bucket_name);
        self
    }

    /// Id and timestamp are generated when not supplied.
    pub fn build(self) -> Result<AuditRecord, anyhow::Error> {
        let event_name = self.event_name.ok_or(anyhow!("Event name is required"))?;
        let details = self.details.ok_or(anyhow!("Details are required"))?;
        let category = self.category.ok_or(anyhow!("Category is required"))?;

        Ok(AuditRecord {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            event_name,
            status: self.status,
            details,
            category,
            metrics: self.metrics,
            bucket_name: self.bucket_name,
        })
    }
}

impl AuditRecord {
    pub fn builder() -> AuditRecordBuilder {
        AuditRecordBuilder::new()
    }
}
