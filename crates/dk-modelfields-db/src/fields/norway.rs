//! Norwegian address and phone number fields.
//!
//! All of these are character glue: fixed-width text columns whose value
//! passes through conversion unchanged, plus length validators.

use dk_modelfields_core::FieldError;

use crate::fields::ModelField;
use crate::validators::{MinLengthValidator, Validator};
use crate::value::Value;

/// A Norwegian telephone number (8 digits).
#[derive(Debug, Clone, Copy, Default)]
pub struct TelefonField;

impl TelefonField {
    /// Creates a telefon field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for TelefonField {
    fn description(&self) -> &'static str {
        "Phone number"
    }

    fn db_type(&self) -> String {
        "VARCHAR(8)".to_string()
    }

    fn max_length(&self) -> Option<usize> {
        Some(8)
    }

    fn validators(&self) -> Vec<Box<dyn Validator>> {
        vec![Box::new(MinLengthValidator::new(8))]
    }

    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }
}

/// A Norwegian street address.
#[derive(Debug, Clone, Copy, Default)]
pub struct GateField;

impl GateField {
    /// Creates a gate (street) field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for GateField {
    fn description(&self) -> &'static str {
        "Norwegian street address field"
    }

    fn db_type(&self) -> String {
        "VARCHAR(50)".to_string()
    }

    fn max_length(&self) -> Option<usize> {
        Some(50)
    }

    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }
}

/// A 4 digit Norwegian zip code. Leading zeroes are significant, so it is
/// stored as character data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostnrField;

impl PostnrField {
    /// Creates a postnr (zip code) field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for PostnrField {
    fn description(&self) -> &'static str {
        "Norwegian zip code field"
    }

    fn db_type(&self) -> String {
        "VARCHAR(4)".to_string()
    }

    fn max_length(&self) -> Option<usize> {
        Some(4)
    }

    fn validators(&self) -> Vec<Box<dyn Validator>> {
        vec![Box::new(MinLengthValidator::new(4))]
    }

    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }
}

/// The name of a Norwegian zip code area.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoststedField;

impl PoststedField {
    /// Creates a poststed (zip code name) field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for PoststedField {
    fn description(&self) -> &'static str {
        "Norwegian zip code name"
    }

    fn db_type(&self) -> String {
        "VARCHAR(50)".to_string()
    }

    fn max_length(&self) -> Option<usize> {
        Some(50)
    }

    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        Ok(value)
    }
}
