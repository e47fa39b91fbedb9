//! An international phone number field (E.164).

use dk_modelfields_core::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::ModelField;
use crate::validators::{MinLengthValidator, RegexValidator, Validator};
use crate::value::Value;

/// E.164 with a country-code separator dot and an optional extension,
/// e.g. `+47.1881` or `+1.5551234567x89`.
static E164_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[0-9]{1,3}\.[0-9]{4,14}(?:x.+)?$").expect("e164 regex is valid")
});

/// An international phone number corresponding to E.164.
///
/// Character glue: values are stored as text and pass through conversion
/// unchanged; the interesting part is the validator set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelephoneField;

impl TelephoneField {
    /// Creates a telephone field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for TelephoneField {
    fn description(&self) -> &'static str {
        "International phone number"
    }

    fn db_type(&self) -> String {
        "VARCHAR(16)".to_string()
    }

    fn max_length(&self) -> Option<usize> {
        Some(16)
    }

    fn validators(&self) -> Vec<Box<dyn Validator>> {
        vec![
            // "+47.1881" is 8 characters
            Box::new(MinLengthValidator::new(8)),
            Box::new(RegexValidator::new(
                E164_RE.clone(),
                "The phone number is not correctly formatted (e164)",
            )),
        ]
    }

    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }
}
