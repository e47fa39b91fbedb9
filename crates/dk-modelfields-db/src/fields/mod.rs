//! The model field trait and the custom field implementations.
//!
//! [`ModelField`] spells out the conversion hooks a custom field exposes to
//! the ORM. The original Django package intercepted attribute access with a
//! metaclass descriptor; here every conversion is an explicit method call
//! at the storage/form boundary.

use std::fmt;

use dk_modelfields_core::FieldError;

use crate::validators::Validator;
use crate::value::Value;

pub mod duration;
pub mod month;
pub mod norway;
pub mod phone;
pub mod status;
pub mod year;

pub use duration::DurationField;
pub use month::MonthField;
pub use norway::{GateField, PostnrField, PoststedField, TelefonField};
pub use phone::TelephoneField;
pub use status::{StatusDef, StatusField, StatusValue};
pub use year::YearField;

/// The conversion hooks of a custom model field.
///
/// A field converts between three representations of one datum: the
/// database storage value, the in-memory domain value, and the
/// form/serialization text form.
pub trait ModelField: fmt::Debug + Send + Sync {
    /// A short human-readable description of the field type.
    fn description(&self) -> &'static str;

    /// The SQL column type for this field.
    fn db_type(&self) -> String;

    /// Maximum character length for character-backed fields.
    fn max_length(&self) -> Option<usize> {
        None
    }

    /// Validators applied before persisting a value.
    fn validators(&self) -> Vec<Box<dyn Validator>> {
        Vec::new()
    }

    /// Allowed values as `(value, display_label)` pairs, for choice-backed
    /// fields.
    fn choices(&self) -> Option<Vec<(String, String)>> {
        None
    }

    /// Converts storage or form input into the field's domain value.
    fn to_python(&self, value: Value) -> Result<Value, FieldError>;

    /// Converts a value as returned by the database into the domain value.
    /// The reverse of [`get_prep_value`](Self::get_prep_value).
    fn from_storage(&self, value: Value) -> Result<Value, FieldError> {
        self.to_python(value)
    }

    /// Converts a domain value into a value usable as a query parameter.
    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError>;

    /// Prepares a lookup argument for a storage-level predicate.
    ///
    /// The base behavior passes the value through unchanged; fields
    /// override this for the lookup types they give special meaning
    /// (`"in"` on status fields, `"year"`/`"month"` on month fields).
    fn get_prep_lookup(&self, lookup_type: &str, value: Value) -> Result<Value, FieldError> {
        let _ = lookup_type;
        Ok(value)
    }

    /// Serializes a domain value to text. `Null` serializes as the empty
    /// string.
    fn value_to_string(&self, value: &Value) -> Result<String, FieldError> {
        match self.get_prep_value(value.clone())? {
            Value::Null => Ok(String::new()),
            prepared => Ok(prepared.to_string()),
        }
    }
}
