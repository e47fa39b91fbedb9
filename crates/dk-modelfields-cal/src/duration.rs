//! An elapsed time span with lenient text parsing.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CalError;

/// The duration grammar: optional weeks and days sections followed by an
/// optional `H:MM[:SS[.ffffff]]` clock section. Section separators are any
/// non-word characters, so `"1 week, 2 days, 3:04:05"` and `"2d 3:04"`
/// both match.
static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (?: (?P<weeks>\d+) \W* (?:weeks?|w) ,? )?
        \W*
        (?: (?P<days>\d+) \W* (?:days?|d) ,? )?
        \W*
        (?:
            (?P<hours>\d+) : (?P<minutes>\d+)
            (?: : (?P<seconds>\d+) (?: \. (?P<microseconds>\d+) )? )?
        )?
        \s*$",
    )
    .expect("duration regex is valid")
});

/// An elapsed amount of time, stored in the database as whole seconds.
///
/// # Examples
///
/// ```
/// use dk_modelfields_cal::Duration;
///
/// let d = Duration::hms(4, 30, 0);
/// assert_eq!(d.to_string(), "4:30:00");
/// assert_eq!(d, "4:30".parse().unwrap());
/// assert_eq!(Duration::parse("1 day, 00:00:00").unwrap().total_seconds(), 86_400);
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
pub struct Duration {
    seconds: i64,
    microseconds: u32,
}

impl Duration {
    /// Creates a duration from hours, minutes, and seconds.
    pub const fn hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            seconds: hours * 3600 + minutes * 60 + seconds,
            microseconds: 0,
        }
    }

    /// Creates a duration from a number of whole seconds.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            microseconds: 0,
        }
    }

    /// The total number of whole seconds (the database representation;
    /// sub-second precision is truncated).
    pub const fn total_seconds(self) -> i64 {
        self.seconds
    }

    /// The sub-second part in microseconds.
    pub const fn subsec_micros(self) -> u32 {
        self.microseconds
    }

    /// Converts to a [`chrono::Duration`].
    pub fn as_chrono(self) -> chrono::Duration {
        chrono::Duration::seconds(self.seconds)
            + chrono::Duration::microseconds(i64::from(self.microseconds))
    }

    /// Parses a duration from its text form.
    ///
    /// Accepts the clock form (`"4:30"`, `"2:20:00"`, `"1:02:03.000500"`)
    /// and the verbose form produced by serializers
    /// (`"1 day, 00:00:00"`, `"2 weeks, 3 days, 4:05:06"`, `"3w 1d"`).
    /// Weeks and days fold into the total.
    pub fn parse(s: &str) -> Result<Self, CalError> {
        let invalid = || CalError::InvalidDuration(s.to_string());
        let caps = DURATION_RE.captures(s).ok_or_else(invalid)?;

        let group = |name: &str| -> Option<i64> {
            caps.name(name).and_then(|m| m.as_str().parse().ok())
        };

        let weeks = group("weeks");
        let days = group("days");
        let hours = group("hours");
        if weeks.is_none() && days.is_none() && hours.is_none() {
            // the grammar matches the empty string; require some content
            return Err(invalid());
        }

        let total_days = days.unwrap_or(0) + weeks.unwrap_or(0) * 7;
        let seconds = total_days * 86_400
            + hours.unwrap_or(0) * 3600
            + group("minutes").unwrap_or(0) * 60
            + group("seconds").unwrap_or(0);
        let microseconds =
            u32::try_from(group("microseconds").unwrap_or(0)).map_err(|_| invalid())?;

        Ok(Self {
            seconds,
            microseconds,
        })
    }
}

impl From<chrono::Duration> for Duration {
    fn from(d: chrono::Duration) -> Self {
        Self {
            seconds: d.num_seconds(),
            microseconds: d.subsec_nanos().unsigned_abs() / 1000,
        }
    }
}

impl FromStr for Duration {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Duration {
    /// `H:MM:SS`, with days folded into the hour count.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        write!(f, "{hours}:{minutes:02}:{seconds:02}")?;
        if self.microseconds > 0 {
            write!(f, ".{:06}", self.microseconds)?;
        }
        Ok(())
    }
}
