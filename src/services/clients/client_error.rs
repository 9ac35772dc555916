pub mod not_found_details;

use crate::services::clients::client_error::not_found_details::NotFoundDetails;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type returned by resource inspection and mutation clients.
/// Pillars branch on the variant, never on the message text.
#[derive(Debug)]
pub enum ClientError {
    /// The resource has no such configuration. A compliance signal, not a failure.
    NotFound(NotFoundDetails),
    /// The caller cannot see this resource; its state cannot be determined.
    AccessDenied(String),
    Throttled(String),
    Other(anyhow::Error),
}

impl ClientError {
    pub fn not_found(resource_id: &str, configuration: &str) -> Self {
        ClientError::NotFound(NotFoundDetails::new(resource_id.to_string(), configuration.to_string()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, ClientError::AccessDenied(_))
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(error: anyhow::Error) -> Self {
        ClientError::Other(error)
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::NotFound(details) => write!(f, "Configuration not found: {}", details),
            ClientError::AccessDenied(resource) => write!(f, "Access denied: {}", resource),
            ClientError::Throttled(message) => write!(f, "Request throttled: {}", message),
            ClientError::Other(e) => write!(f, "An error occurred: {}", e),
        }
    }
}

impl Error for ClientError {}
