/// Use Case Errors
///
/// The single failure type every use case returns. Validation failures
/// carry the full `Notification`; the transport layer decides how each
/// variant is rendered.

use thiserror::Error;

use crate::domain::errors::{DomainError, GatewayError, VALIDATION_FAILED_MESSAGE};
use crate::domain::validation::{Notification, ValidationError, ValidationHandler};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    /// Input violated one or more domain rules
    #[error("{message}")]
    Validation {
        message: String,
        notification: Notification,
    },

    /// The addressed aggregate does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Anything else, typically a storage failure
    #[error("{message}")]
    Unexpected { message: String },
}

impl UseCaseError {
    pub fn validation(notification: Notification) -> Self {
        UseCaseError::Validation {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            notification,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        UseCaseError::Unexpected {
            message: message.into(),
        }
    }

    /// Validation errors attached to this failure
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            UseCaseError::Validation { notification, .. } => notification.errors(),
            _ => &[],
        }
    }

    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            UseCaseError::Validation { .. } => "validation",
            UseCaseError::NotFound { .. } => "not_found",
            UseCaseError::Unexpected { .. } => "unexpected",
        }
    }
}

impl From<DomainError> for UseCaseError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { message, errors } => {
                let mut notification = Notification::new();
                for error in errors {
                    notification.append(error);
                }
                UseCaseError::Validation {
                    message,
                    notification,
                }
            }
            not_found @ DomainError::NotFound { .. } => UseCaseError::NotFound {
                message: not_found.to_string(),
            },
        }
    }
}

impl From<GatewayError> for UseCaseError {
    fn from(e: GatewayError) -> Self {
        UseCaseError::Unexpected { message: e.message }
    }
}
