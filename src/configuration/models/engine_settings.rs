
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_MAX_LISTED_IDENTIFIERS: usize = 3;

/// Engine-wide knobs. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub scan_event_name: String,
    pub remediation_event_name: String,
    pub targeted_event_name: String,
    /// How many identifiers a report section names before collapsing the rest into `(+N)`.
    pub max_listed_identifiers: usize,
    /// Server-side encryption algorithm applied to unencrypted buckets.
    pub sse_algorithm: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            scan_event_name: "SecurityScan".to_string(),
            remediation_event_name: "AutoRemediation".to_string(),
            targeted_event_name: "EventDrivenRemediation".to_string(),
            max_listed_identifiers: DEFAULT_MAX_LISTED_IDENTIFIERS,
            sse_algorithm: "AES256".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn from_yaml(document: &str) -> anyhow::Result<Self> {
        let settings: EngineSettings = serde_yml::from_str(document).context("Invalid engine settings")?;
        if settings.max_listed_identifiers == 0 {
            anyhow::bail!("max_listed_identifiers must be at least 1");
        }
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine settings from {}", path.display()))?;
        Self::from_yaml(&document)
    }
}
