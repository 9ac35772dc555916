pub mod audit_record_builder;
#[cfg(test)]
mod tests;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metric name to value, ordered by name.
pub type Metrics = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStatus {
    Success,
    Warning,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Success => "SUCCESS",
            AuditStatus::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditCategory {
    Scan,
    Remediation,
}

impl AuditCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditCategory::Scan => "Scan",
            AuditCategory::Remediation => "Remediation",
        }
    }
}

/// The single log entry produced by an invocation. Field names on the wire
/// match the audit log table the records are persisted to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditRecord {
    #[serde(rename = "LogId")]
    id: String,
    timestamp: DateTime<Utc>,
    event_name: String,
    status: AuditStatus,
    details: String,
    category: AuditCategory,
    #[serde(rename = "Meta")]
    metrics: Metrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bucket_name: Option<String>,
}

impl AuditRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 UTC instant with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn status(&self) -> AuditStatus {
        self.status
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn category(&self) -> AuditCategory {
        self.category
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metric(&self, name: &str) -> Option<&Value> {
        self.metrics.get(name)
    }

    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }
}
