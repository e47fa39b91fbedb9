//! Error types for the dk-modelfields crates.
//!
//! [`FieldError`] covers everything a field adapter can report: conversion
//! failures, unknown status names, lookup misuse, and validation errors.

use std::fmt;

use thiserror::Error;

/// A validation error with a message and a short error code.
///
/// The code identifies the kind of failure (e.g. `"required"`,
/// `"invalid_choice"`, `"max_length"`) so callers can react without
/// matching on message text.
///
/// # Examples
///
/// ```
/// use dk_modelfields_core::ValidationError;
///
/// let err = ValidationError::new("Enter a valid duration.", "invalid");
/// assert_eq!(err.code, "invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The human-readable error message.
    pub message: String,
    /// A short code identifying the type of validation failure.
    pub code: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The error type for field value conversion and validation.
#[derive(Error, Debug)]
pub enum FieldError {
    /// A string value that does not name any parsed status.
    #[error("Unknown status: {0:?}")]
    UnknownStatus(String),

    /// A status definition line that fails the content pattern.
    ///
    /// Only produced by the strict parsing mode; the default parser skips
    /// such lines with a warning.
    #[error("malformed status definition line: {line:?}")]
    MalformedStatusLine {
        /// The offending line, trimmed.
        line: String,
    },

    /// A value the field cannot convert to its domain type.
    #[error("invalid {kind} value: {value}")]
    InvalidValue {
        /// What the field expected (e.g. "month", "duration").
        kind: &'static str,
        /// Text form of the offending value.
        value: String,
    },

    /// A lookup argument the field cannot prepare.
    #[error("the __{lookup} lookup does not understand {value}")]
    InvalidLookup {
        /// The lookup type (e.g. "year").
        lookup: String,
        /// Text form of the offending value.
        value: String,
    },

    /// A validator rejected the value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("This field is required.", "required");
        assert_eq!(err.to_string(), "This field is required.");
        assert_eq!(err.code, "required");
    }

    #[test]
    fn test_unknown_status_message() {
        let err = FieldError::UnknownStatus("bogus".to_string());
        assert_eq!(err.to_string(), "Unknown status: \"bogus\"");
    }

    #[test]
    fn test_invalid_lookup_message() {
        let err = FieldError::InvalidLookup {
            lookup: "year".to_string(),
            value: "XX".to_string(),
        };
        assert_eq!(err.to_string(), "the __year lookup does not understand XX");
    }

    #[test]
    fn test_validation_error_into_field_error() {
        let err: FieldError = ValidationError::new("Invalid month: '13'", "invalid").into();
        assert!(matches!(err, FieldError::Validation(_)));
    }
}
