//! The value type passed between fields, the ORM, and form code.
//!
//! [`Value`] is the tagged union that field conversions dispatch on. The
//! variants make the conversion cases finite and visible: `Null` is the
//! empty/missing case, `Status`/`Month`/`Year`/`Duration` are
//! already-converted domain values, `String` is raw text from the database
//! or a form, and the remaining variants pass through conversions
//! untouched.

use std::fmt;

use chrono::NaiveDate;
use dk_modelfields_cal::{Duration, Month, Year};

use crate::fields::StatusValue;

/// A field value in any of its representations.
///
/// # Examples
///
/// ```
/// use dk_modelfields_db::value::Value;
///
/// let v = Value::from("sale");
/// assert_eq!(v.as_str(), Some("sale"));
/// assert_eq!(Value::from(42_i64), Value::Int(42));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// SQL NULL / missing value.
    Null,
    /// A 64-bit signed integer.
    Int(i64),
    /// A UTF-8 string.
    String(String),
    /// A date without time.
    Date(NaiveDate),
    /// A calendar month.
    Month(Month),
    /// A calendar year.
    Year(Year),
    /// An elapsed time span.
    Duration(Duration),
    /// A parsed status value.
    Status(StatusValue),
    /// A list of values (IN clauses, range bounds).
    List(Vec<Value>),
}

impl fmt::Display for Value {
    /// The storage-facing text form: dates as `YYYY-MM-DD`, months as
    /// `YYYY-MM`, durations as `H:MM:SS`, statuses as their name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Month(m) => write!(f, "{m}"),
            Self::Year(y) => write!(f, "{y}"),
            Self::Duration(d) => write!(f, "{d}"),
            Self::Status(s) => write!(f, "{s}"),
            Self::List(vals) => {
                write!(f, "[")?;
                for (i, v) in vals.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<Month> for Value {
    fn from(v: Month) -> Self {
        Self::Month(v)
    }
}

impl From<Year> for Value {
    fn from(v: Year) -> Self {
        Self::Year(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<StatusValue> for Value {
    fn from(v: StatusValue) -> Self {
        Self::Status(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}

impl Value {
    /// Returns `true` if this value is `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to extract an integer value.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a month.
    pub const fn as_month(&self) -> Option<Month> {
        match self {
            Self::Month(m) => Some(*m),
            _ => None,
        }
    }

    /// Attempts to extract a year.
    pub const fn as_year(&self) -> Option<Year> {
        match self {
            Self::Year(y) => Some(*y),
            _ => None,
        }
    }

    /// Attempts to extract a duration.
    pub const fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to extract a status value.
    pub const fn as_status(&self) -> Option<&StatusValue> {
        match self {
            Self::Status(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(vals) => Some(vals),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(42_i64), Value::Int(42));
        assert_eq!(Value::from(42_i32), Value::Int(42));
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_from_option() {
        let some: Option<i64> = Some(7);
        assert_eq!(Value::from(some), Value::Int(7));
        let none: Option<i64> = None;
        assert_eq!(Value::from(none), Value::Null);
    }

    #[test]
    fn test_from_cal_types() {
        let m = Month::new(2016, 7).unwrap();
        assert_eq!(Value::from(m), Value::Month(m));
        assert_eq!(Value::from(Year::new(2016)), Value::Year(Year::new(2016)));
        let d = Duration::hms(1, 0, 0);
        assert_eq!(Value::from(d), Value::Duration(d));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int(3).to_string(), "3");
        assert_eq!(Value::Month(Month::new(2016, 4).unwrap()).to_string(), "2016-04");
        assert_eq!(
            Value::Date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap()).to_string(),
            "2016-01-01"
        );
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::Int(2)]).to_string(),
            "[1, 2]"
        );
    }

    #[test]
    fn test_serde_tagged_form() {
        let v = Value::Month(Month::new(2016, 4).unwrap());
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"type":"Month","value":{"year":2016,"month":4}}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), r#"{"type":"Null"}"#);
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Int(5).as_int(), Some(5));
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Int(5).as_str(), None);
        assert!(Value::List(vec![]).as_list().is_some());
    }
}
