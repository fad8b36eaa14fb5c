/// Validation Primitives - Error Accumulation
///
/// This module provides the building blocks entities use to report rule
/// violations without failing on the first one.
///
/// ## Types
/// - `ValidationError`: a single violated rule, carried as a message
/// - `ValidationHandler`: sink that receives errors while validating
/// - `Notification`: the accumulating handler used by use cases
/// - `Validator`: implemented by per-entity rule sets
///
/// ## Usage
/// ```rust
/// use catalog_admin::domain::category::Category;
/// use catalog_admin::domain::entity::Entity;
/// use catalog_admin::domain::validation::{Notification, ValidationHandler};
///
/// let category = Category::new_category(Some("Movies".to_string()), None, true);
/// let mut notification = Notification::new();
/// category.validate(&mut notification);
/// assert!(!notification.has_errors());
/// ```

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// A single violated validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Receives validation errors as rules are checked
pub trait ValidationHandler {
    /// Records one error
    fn append(&mut self, error: ValidationError);

    /// Errors recorded so far, in insertion order
    fn errors(&self) -> &[ValidationError];

    /// Copies every error recorded by another handler
    fn append_all(&mut self, other: &dyn ValidationHandler) {
        for error in other.errors() {
            self.append(error.clone());
        }
    }

    /// Runs a fallible check and records whatever it reports
    ///
    /// A `DomainError::Validation` contributes all of its errors; any other
    /// error contributes a single entry with its display message.
    fn validate<F>(&mut self, check: F)
    where
        F: FnOnce() -> Result<(), DomainError>,
        Self: Sized,
    {
        match check() {
            Ok(()) => {}
            Err(DomainError::Validation { errors, .. }) => {
                for error in errors {
                    self.append(error);
                }
            }
            Err(other) => self.append(ValidationError::new(other.to_string())),
        }
    }

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Accumulating validation handler
///
/// Collects every error reported to it. Use cases hand a fresh
/// notification to `Entity::validate` and inspect it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notification holding a single error
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Converts the notification into a domain error if anything was recorded
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// A rule set bound to one entity
pub trait Validator {
    fn validate(&self, handler: &mut dyn ValidationHandler);
}

/// Shared rule for required, bounded names
///
/// Reports at most one error: null, blank, or out of the length range.
pub(crate) fn check_name(
    name: Option<&str>,
    min_length: usize,
    max_length: usize,
    handler: &mut dyn ValidationHandler,
) {
    let Some(name) = name else {
        handler.append(ValidationError::new("'name' cannot be null"));
        return;
    };

    if name.trim().is_empty() {
        handler.append(ValidationError::new("'name' cannot be empty"));
        return;
    }

    let length = name.trim().chars().count();
    if length < min_length || length > max_length {
        handler.append(ValidationError::new(format!(
            "'name' must be between {} and {} characters",
            min_length, max_length
        )));
    }
}

/// Optional text bounded by a maximum character count
pub(crate) fn check_max_length(
    field: &str,
    value: Option<&str>,
    max_length: usize,
    handler: &mut dyn ValidationHandler,
) {
    if value.is_some_and(|value| value.chars().count() > max_length) {
        handler.append(ValidationError::new(format!(
            "'{}' must have at most {} characters",
            field, max_length
        )));
    }
}
