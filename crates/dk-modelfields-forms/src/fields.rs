//! Form field conversion for duration, month, year, and status values.

use dk_modelfields_cal::{Duration, Month, Year};
use dk_modelfields_core::{FieldError, ValidationError};
use dk_modelfields_db::fields::StatusDef;

fn required_error() -> FieldError {
    ValidationError::new("This field is required.", "required").into()
}

/// Form field for the duration model field.
///
/// # Examples
///
/// ```
/// use dk_modelfields_cal::Duration;
/// use dk_modelfields_forms::DurationFormField;
///
/// let f = DurationFormField::new();
/// assert_eq!(f.clean("4:30").unwrap(), Some(Duration::hms(4, 30, 0)));
/// assert!(f.clean("junk").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DurationFormField {
    required: bool,
}

impl DurationFormField {
    /// Creates a required duration form field.
    pub const fn new() -> Self {
        Self { required: true }
    }

    /// Makes the field optional: empty input cleans to `None`.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Converts submitted text into a [`Duration`].
    pub fn clean(&self, raw: &str) -> Result<Option<Duration>, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(required_error())
            } else {
                Ok(None)
            };
        }
        Duration::parse(raw)
            .map(Some)
            .map_err(|_| ValidationError::new("Enter a valid duration.", "invalid").into())
    }
}

impl Default for DurationFormField {
    fn default() -> Self {
        Self::new()
    }
}

/// Form field for the month model field (`<input type="month">` input,
/// `"YYYY-MM"` text form).
#[derive(Debug, Clone, Copy)]
pub struct MonthFormField {
    required: bool,
}

impl MonthFormField {
    /// Creates a required month form field.
    pub const fn new() -> Self {
        Self { required: true }
    }

    /// Makes the field optional: empty input cleans to `None`.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Converts submitted text into a [`Month`].
    pub fn clean(&self, raw: &str) -> Result<Option<Month>, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(required_error())
            } else {
                Ok(None)
            };
        }
        Month::parse(raw).map(Some).map_err(|_| {
            ValidationError::new(format!("Invalid month: {raw:?}"), "invalid").into()
        })
    }
}

impl Default for MonthFormField {
    fn default() -> Self {
        Self::new()
    }
}

/// Form field for the year model field (`<input type="number">` input).
#[derive(Debug, Clone, Copy)]
pub struct YearFormField {
    required: bool,
}

impl YearFormField {
    /// Creates a required year form field.
    pub const fn new() -> Self {
        Self { required: true }
    }

    /// Makes the field optional: empty input cleans to `None`.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Converts submitted text into a [`Year`].
    pub fn clean(&self, raw: &str) -> Result<Option<Year>, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(required_error())
            } else {
                Ok(None)
            };
        }
        raw.parse::<Year>().map(Some).map_err(|_| {
            ValidationError::new(format!("Invalid year: {raw:?}"), "invalid").into()
        })
    }
}

impl Default for YearFormField {
    fn default() -> Self {
        Self::new()
    }
}

/// A select-box form field over a status definition.
///
/// Choices are the definition's `(name, verbose)` pairs in declaration
/// order; cleaning coerces submitted input to the canonical status name.
#[derive(Debug, Clone)]
pub struct StatusSelectField {
    choices: Vec<(String, String)>,
    required: bool,
}

impl StatusSelectField {
    /// Creates a select field from a parsed status definition.
    pub fn from_def(def: &StatusDef) -> Self {
        Self {
            choices: def.options(),
            required: true,
        }
    }

    /// Makes the field optional: empty input cleans to `None`.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// The `(name, verbose)` pairs, in definition order.
    pub fn choices(&self) -> &[(String, String)] {
        &self.choices
    }

    /// Coerces submitted input to a status name from the choice set.
    pub fn clean(&self, raw: &str) -> Result<Option<String>, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required {
                Err(required_error())
            } else {
                Ok(None)
            };
        }
        if self.choices.iter().any(|(name, _)| name == raw) {
            Ok(Some(raw.to_string()))
        } else {
            Err(ValidationError::new(
                format!("Select a valid choice. {raw:?} is not one of the available choices."),
                "invalid_choice",
            )
            .into())
        }
    }
}
