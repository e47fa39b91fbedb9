//! Storage-level lookup helpers.

use chrono::NaiveDate;
use dk_modelfields_cal::Year;

/// Returns the inclusive date range covering a calendar year.
///
/// Used to turn a `__year` lookup on a DATE-backed month column into a
/// `BETWEEN` pair the storage layer understands.
///
/// # Examples
///
/// ```
/// use dk_modelfields_db::lookups::year_lookup_bounds;
///
/// let (lo, hi) = year_lookup_bounds(2016);
/// assert_eq!(lo.to_string(), "2016-01-01");
/// assert_eq!(hi.to_string(), "2016-12-31");
/// ```
pub fn year_lookup_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let y = Year::new(year);
    (y.first_day(), y.last_day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_lookup_bounds() {
        let (lo, hi) = year_lookup_bounds(2016);
        assert_eq!(lo, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
        assert_eq!(hi, NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());
    }
}
