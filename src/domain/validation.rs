//! Error accumulation for domain validation.
//!
//! Validators never stop at the first violation: every rule appends to a
//! [`Notification`] owned by the caller, which inspects it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A single validation violation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ordered collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a notification holding a single error.
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Appends one error.
    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `other`, preserving its order.
    pub fn append_all(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Runs `check` and records its error, if any.
    pub fn capture<F>(&mut self, check: F) -> &mut Self
    where
        F: FnOnce() -> Result<(), ValidationError>,
    {
        if let Err(error) = check() {
            self.append(error);
        }
        self
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The earliest appended error.
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for Notification {}

impl From<ValidationError> for Notification {
    fn from(value: ValidationError) -> Self {
        Self::from_error(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_is_the_earliest_appended() {
        let mut notification = Notification::new();
        notification
            .append(ValidationError::new("first"))
            .append(ValidationError::new("second"));

        assert_eq!(notification.len(), 2);
        assert_eq!(notification.first_error().unwrap().message(), "first");
    }

    #[test]
    fn append_all_keeps_order() {
        let mut left = Notification::from_error(ValidationError::new("a"));
        let mut right = Notification::new();
        right
            .append(ValidationError::new("b"))
            .append(ValidationError::new("c"));

        left.append_all(right);

        let messages: Vec<_> = left.errors().iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
        assert_eq!(left.to_string(), "a; b; c");
    }

    #[test]
    fn capture_records_only_failures() {
        let mut notification = Notification::new();
        notification
            .capture(|| Ok(()))
            .capture(|| Err(ValidationError::new("broken")));

        assert_eq!(notification.len(), 1);
        assert_eq!(notification.first_error().unwrap().message(), "broken");
    }

    #[test]
    fn empty_notification_has_no_first_error() {
        let notification = Notification::new();
        assert!(!notification.has_errors());
        assert!(notification.first_error().is_none());
    }
}
