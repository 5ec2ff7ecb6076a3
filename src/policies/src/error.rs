//! Error types for the policy engine

use thiserror::Error;

/// Policy engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Malformed policy document
    #[error("Malformed policy document: {0}")]
    Malformed(String),

    /// Unsupported policy document version
    #[error("Unsupported policy version: {0}")]
    UnsupportedVersion(String),

    /// Resource type not registered in the vocabulary
    #[error("Unknown resource type: {resource_type}")]
    UnknownResourceType {
        resource_type: String,
    },

    /// Action not permitted for the resource type by the vocabulary
    #[error("Unknown action '{action}' for resource type '{resource_type}'")]
    UnknownAction {
        resource_type: String,
        action: String,
    },
}

/// Result type for policy operations
pub type Result<T> = std::result::Result<T, PolicyError>;
