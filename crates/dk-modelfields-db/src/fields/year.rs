//! A YEAR(4)-backed year field.

use dk_modelfields_cal::Year;
use dk_modelfields_core::FieldError;

use crate::fields::ModelField;
use crate::value::Value;

/// Maps a `YEAR(4)` column to a [`Year`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YearField;

impl YearField {
    /// Creates a year field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for YearField {
    fn description(&self) -> &'static str {
        "Year field"
    }

    fn db_type(&self) -> String {
        "YEAR(4)".to_string()
    }

    /// Integers convert to a [`Year`]; empty input (including zero)
    /// converts to `Null`; everything else passes through unchanged —
    /// notably a non-empty string stays a string.
    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::String(s) if s.is_empty() => Ok(Value::Null),
            Value::Int(0) => Ok(Value::Null),
            Value::Int(i) => i32::try_from(i)
                .map(|y| Value::Year(Year::new(y)))
                .map_err(|_| FieldError::InvalidValue {
                    kind: "year",
                    value: i.to_string(),
                }),
            other => Ok(other),
        }
    }

    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::Int(i) => Ok(Value::Int(i)),
            Value::Year(y) => Ok(Value::Int(i64::from(y.value()))),
            other => Ok(other),
        }
    }
}
