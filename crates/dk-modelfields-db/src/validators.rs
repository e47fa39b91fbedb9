//! Field validators.
//!
//! Validators enforce constraints on field values before they are
//! persisted. They are attached to fields via
//! [`ModelField::validators`](crate::fields::ModelField::validators).

use std::fmt;

use dk_modelfields_core::{FieldError, ValidationError};
use regex::Regex;

use crate::value::Value;

/// A trait for validating field values.
///
/// Each validator checks a single constraint and returns an error when the
/// value does not satisfy it. Non-string values are ignored by the
/// string-oriented validators.
///
/// # Examples
///
/// ```
/// use dk_modelfields_db::validators::{MaxLengthValidator, Validator};
/// use dk_modelfields_db::value::Value;
///
/// let v = MaxLengthValidator::new(5);
/// assert!(v.validate(&Value::String("hi".into())).is_ok());
/// assert!(v.validate(&Value::String("toolong".into())).is_err());
/// ```
pub trait Validator: Send + Sync + fmt::Debug {
    /// Validates the given value, returning an error if invalid.
    fn validate(&self, value: &Value) -> Result<(), FieldError>;

    /// Returns a human-readable name for this validator.
    fn name(&self) -> &str;
}

/// Validates that a string value does not exceed a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    /// The maximum allowed length.
    pub max_length: usize,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator` with the given maximum length.
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &Value) -> Result<(), FieldError> {
        if let Value::String(s) = value {
            if s.chars().count() > self.max_length {
                return Err(ValidationError::new(
                    format!(
                        "Ensure this value has at most {} characters (it has {}).",
                        self.max_length,
                        s.chars().count()
                    ),
                    "max_length",
                )
                .into());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MaxLengthValidator"
    }
}

/// Validates that a string value meets a minimum length requirement.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    /// The minimum required length.
    pub min_length: usize,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator` with the given minimum length.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &Value) -> Result<(), FieldError> {
        if let Value::String(s) = value {
            if s.chars().count() < self.min_length {
                return Err(ValidationError::new(
                    format!(
                        "Ensure this value has at least {} characters (it has {}).",
                        self.min_length,
                        s.chars().count()
                    ),
                    "min_length",
                )
                .into());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "MinLengthValidator"
    }
}

/// Validates a string value against a regular expression.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new `RegexValidator` with a compiled pattern and the
    /// message to report on mismatch.
    pub fn new(regex: Regex, message: impl Into<String>) -> Self {
        Self {
            regex,
            message: message.into(),
        }
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &Value) -> Result<(), FieldError> {
        if let Value::String(s) = value {
            if !self.regex.is_match(s) {
                return Err(ValidationError::new(self.message.clone(), "invalid").into());
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RegexValidator"
    }
}
