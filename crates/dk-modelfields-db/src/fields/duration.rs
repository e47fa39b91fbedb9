//! A BIGINT-backed duration field.

use dk_modelfields_cal::Duration;
use dk_modelfields_core::FieldError;

use crate::fields::ModelField;
use crate::value::Value;

/// Maps a BIGINT column (elapsed whole seconds) to a [`Duration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationField;

impl DurationField {
    /// Creates a duration field.
    pub const fn new() -> Self {
        Self
    }
}

impl ModelField for DurationField {
    fn description(&self) -> &'static str {
        "A duration of time"
    }

    fn db_type(&self) -> String {
        "BIGINT".to_string()
    }

    /// Converts input into a [`Duration`].
    ///
    /// The value may come from the database column or a serializer, so
    /// integers (seconds) and duration text forms are both accepted.
    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Duration(d) => Ok(Value::Duration(d)),
            Value::Int(i) => Ok(Value::Duration(Duration::from_seconds(i))),
            Value::String(s) => Duration::parse(&s)
                .map(Value::Duration)
                .map_err(|_| FieldError::InvalidValue {
                    kind: "duration",
                    value: s,
                }),
            other => Err(FieldError::InvalidValue {
                kind: "duration",
                value: other.to_string(),
            }),
        }
    }

    /// The number of elapsed seconds, as the database wants it.
    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        match self.to_python(value)? {
            Value::Null => Ok(Value::Null),
            Value::Duration(d) => Ok(Value::Int(d.total_seconds())),
            other => Ok(other),
        }
    }

    /// Serializes as the duration's text form (`"0:02:00"`), which
    /// [`to_python`](Self::to_python) parses back; the seconds integer is
    /// the storage form only.
    fn value_to_string(&self, value: &Value) -> Result<String, FieldError> {
        match self.to_python(value.clone())? {
            Value::Null => Ok(String::new()),
            other => Ok(other.to_string()),
        }
    }
}
