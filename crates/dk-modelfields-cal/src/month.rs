//! A calendar month (year + month, no day).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::CalError;

/// A calendar month, e.g. 2016-07.
///
/// Stored in the database as the first day of the month in a DATE column.
/// Ordering is chronological.
///
/// # Examples
///
/// ```
/// use dk_modelfields_cal::Month;
///
/// let m = Month::new(2016, 7).unwrap();
/// assert_eq!(m.to_string(), "2016-07");
/// assert_eq!(m.first_day().to_string(), "2016-07-01");
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
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self, CalError> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(CalError::InvalidMonth(format!("{year}-{month}")))
        }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// The 1-based month number.
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The first day of this month.
    pub fn first_day(self) -> NaiveDate {
        // month is validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// The last day of this month.
    pub fn last_day(self) -> NaiveDate {
        let (ny, nm) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(ny, nm, 1)
            .unwrap_or_default()
            .pred_opt()
            .unwrap_or_default()
    }

    /// Parses a month from its text form.
    ///
    /// Reads the first four characters as the year and the characters after
    /// the separator as the month, so `"2016-07"`, `"2015-02-04"`, and
    /// `"2015-2"` all parse. Any day component is discarded.
    pub fn parse(s: &str) -> Result<Self, CalError> {
        let s = s.trim();
        let invalid = || CalError::InvalidMonth(s.to_string());
        if s.len() < 6 || !s.is_char_boundary(4) || !s.is_char_boundary(5) {
            return Err(invalid());
        }
        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let rest = &s[5..];
        let month_digits: String = rest.chars().take_while(char::is_ascii_digit).take(2).collect();
        let month: u32 = month_digits.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl FromStr for Month {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_month_number() {
        assert!(Month::new(2016, 1).is_ok());
        assert!(Month::new(2016, 12).is_ok());
        assert!(Month::new(2016, 0).is_err());
        assert!(Month::new(2016, 13).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2016-07").unwrap(), Month::new(2016, 7).unwrap());
        assert_eq!(Month::parse("2015-2").unwrap(), Month::new(2015, 2).unwrap());
        assert!(Month::parse("").is_err());
        assert!(Month::parse("garbage").is_err());
        assert!(Month::parse("2016-13").is_err());
    }

    #[test]
    fn test_parse_discards_day() {
        assert_eq!(
            Month::parse("2015-02-04").unwrap(),
            Month::new(2015, 2).unwrap()
        );
    }

    #[test]
    fn test_from_date() {
        let d = NaiveDate::from_ymd_opt(2016, 4, 2).unwrap();
        assert_eq!(Month::from_date(d), Month::new(2016, 4).unwrap());
    }

    #[test]
    fn test_first_and_last_day() {
        let m = Month::new(2016, 2).unwrap();
        assert_eq!(m.first_day(), NaiveDate::from_ymd_opt(2016, 2, 1).unwrap());
        assert_eq!(m.last_day(), NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());

        let dec = Month::new(2017, 12).unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2017, 12, 31).unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2017, 12).unwrap().to_string(), "2017-12");
        assert_eq!(Month::new(815, 3).unwrap().to_string(), "0815-03");
    }

    #[test]
    fn test_ordering() {
        let jan = Month::new(2017, 1).unwrap();
        let feb = Month::new(2017, 2).unwrap();
        assert!(jan < feb);
    }
}
