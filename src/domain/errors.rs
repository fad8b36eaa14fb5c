/// Domain Errors
///
/// Errors raised by domain rules and by the persistence port. Transport
/// concerns (status codes, payload shapes) live in the infrastructure layer.

use thiserror::Error;

use super::validation::ValidationError;

pub const VALIDATION_FAILED_MESSAGE: &str = "One or more errors occurred during validation";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// One or more domain rules were violated
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// The requested aggregate does not exist
    #[error("{aggregate} with id {id} not found")]
    NotFound { aggregate: &'static str, id: String },
}

impl DomainError {
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        DomainError::Validation {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }

    pub fn not_found(aggregate: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            aggregate,
            id: id.into(),
        }
    }

    /// Errors attached to this failure (empty for not-found)
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            DomainError::NotFound { .. } => &[],
        }
    }
}

/// Failure reported by a gateway implementation
///
/// Gateways translate their driver errors into this type so the
/// application layer never sees database types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("Category", "123");
        assert_eq!(err.to_string(), "Category with id 123 not found");
        assert!(err.errors().is_empty());
    }

    #[test]
    fn test_validation_message() {
        let err = DomainError::validation(vec![ValidationError::new("'name' cannot be null")]);
        assert_eq!(err.to_string(), VALIDATION_FAILED_MESSAGE);
        assert_eq!(err.errors()[0].message, "'name' cannot be null");
    }
}
