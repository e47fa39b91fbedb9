//! A DATE-backed month field.

use chrono::Datelike;
use dk_modelfields_cal::Month;
use dk_modelfields_core::FieldError;

use crate::fields::ModelField;
use crate::lookups::year_lookup_bounds;
use crate::value::Value;

/// Maps a DATE column to a [`Month`], storing the first day of the month.
///
/// Supports two synthesized lookups on top of the plain column:
/// `__year`, which turns a year into the covering date range, and
/// `__month`, which matches the month's text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthField;

impl MonthField {
    /// Creates a month field.
    pub const fn new() -> Self {
        Self
    }

    fn month_of(value: &Value) -> Option<Month> {
        match value {
            Value::Month(m) => Some(*m),
            Value::Date(d) => Some(Month::from_date(*d)),
            Value::String(s) => Month::parse(s).ok(),
            _ => None,
        }
    }

    fn lookup_year(value: &Value) -> Result<i32, FieldError> {
        let bad = || FieldError::InvalidLookup {
            lookup: "year".to_string(),
            value: value.to_string(),
        };
        match value {
            Value::Year(y) => Ok(y.value()),
            Value::Int(i) => i32::try_from(*i).map_err(|_| bad()),
            Value::String(s) => s.trim().parse().map_err(|_| bad()),
            Value::Date(d) => Ok(d.year()),
            Value::Month(m) => Ok(m.year()),
            // a [start, end] range pair: the first bound decides the year
            Value::List(items) => match items.first() {
                Some(Value::Date(d)) => Ok(d.year()),
                Some(Value::String(s)) => {
                    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                        .map(|dt| dt.year())
                        .map_err(|_| bad())
                }
                Some(Value::Month(m)) => Ok(m.year()),
                Some(Value::Year(y)) => Ok(y.value()),
                _ => Err(bad()),
            },
            _ => Err(bad()),
        }
    }
}

impl ModelField for MonthField {
    fn description(&self) -> &'static str {
        "A generic Month field"
    }

    fn db_type(&self) -> String {
        "DATE".to_string()
    }

    /// Converts input into a [`Month`].
    ///
    /// Dates convert to the month containing them; strings are parsed
    /// (`"2015-02-04"` becomes 2015-02); empty input converts to `Null`.
    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Month(m) => Ok(Value::Month(m)),
            Value::Date(d) => Ok(Value::Month(Month::from_date(d))),
            Value::String(s) if s.trim().is_empty() => Ok(Value::Null),
            Value::String(s) => Month::parse(&s)
                .map(Value::Month)
                .map_err(|_| FieldError::InvalidValue {
                    kind: "month",
                    value: s,
                }),
            other => Err(FieldError::InvalidValue {
                kind: "month",
                value: other.to_string(),
            }),
        }
    }

    /// A month becomes the first day of the month (`"2015-06-01"`); strings
    /// pass through as-is; a `[start, end]` range pair collapses to its
    /// first bound's month. Anything else passes through unchanged.
    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::String(s) => Ok(Value::String(s)),
            Value::Month(m) => Ok(Value::String(format!("{m}-01"))),
            Value::List(items) => {
                let first = items.first().and_then(Self::month_of);
                first.map_or_else(
                    || {
                        Err(FieldError::InvalidValue {
                            kind: "month",
                            value: Value::List(items.clone()).to_string(),
                        })
                    },
                    |m| Ok(Value::String(format!("{m}-01"))),
                )
            }
            other => Ok(other),
        }
    }

    fn get_prep_lookup(&self, lookup_type: &str, value: Value) -> Result<Value, FieldError> {
        match lookup_type {
            "year" => {
                let year = Self::lookup_year(&value)?;
                let (lo, hi) = year_lookup_bounds(year);
                Ok(Value::List(vec![
                    Value::String(lo.to_string()),
                    Value::String(hi.to_string()),
                ]))
            }
            "month" => Ok(Value::List(vec![Value::String(value.to_string())])),
            _ => Ok(value),
        }
    }

    /// Serializes as `"YYYY-MM"` (no day component), empty for `Null`.
    fn value_to_string(&self, value: &Value) -> Result<String, FieldError> {
        match self.to_python(value.clone())? {
            Value::Null => Ok(String::new()),
            Value::Month(m) => Ok(m.to_string()),
            other => Ok(other.to_string()),
        }
    }
}
