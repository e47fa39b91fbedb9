//! A calendar year.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::CalError;

/// A calendar year, e.g. 2016.
///
/// Stored in the database as a YEAR(4) column.
///
/// # Examples
///
/// ```
/// use dk_modelfields_cal::Year;
///
/// let y = Year::new(2016);
/// assert_eq!(y.to_string(), "2016");
/// assert_eq!(y.first_day().to_string(), "2016-01-01");
/// assert_eq!(y.last_day().to_string(), "2016-12-31");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Year(i32);

impl Year {
    /// Creates a year.
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// The year number.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// January 1st of this year.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 1, 1).unwrap_or_default()
    }

    /// December 31st of this year.
    pub fn last_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 12, 31).unwrap_or_default()
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl FromStr for Year {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| CalError::InvalidYear(s.to_string()))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
