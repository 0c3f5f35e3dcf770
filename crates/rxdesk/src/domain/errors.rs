//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Inbound payload does not match the expected shape
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// Remote store call failed or returned nothing where data was expected
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Stored data cannot be reconstructed into the typed record
    #[error("Stored record has unexpected shape: {0}")]
    Shape(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("Prescription", 42);
        assert_eq!(err.to_string(), "Entity not found: Prescription with id 42");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_server_side_errors() {
        assert!(!DomainError::Persistence("timeout".into()).is_client_error());
        assert!(!DomainError::Shape("medicines".into()).is_client_error());
    }
}
