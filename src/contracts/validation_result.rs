use serde::Serialize;

/// Outcome of re-checking a single resource right before remediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub resource_id: String,
    pub is_noncompliant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn noncompliant(resource_id: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            is_noncompliant: true,
            error: None,
        }
    }

    pub fn compliant(resource_id: &str) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            is_noncompliant: false,
            error: None,
        }
    }

    /// The check could not be completed; never reported as non-compliant.
    pub fn inconclusive(resource_id: &str, error: String) -> Self {
        Self {
            resource_id: resource_id.to_string(),
            is_noncompliant: false,
            error: Some(error),
        }
    }
}
