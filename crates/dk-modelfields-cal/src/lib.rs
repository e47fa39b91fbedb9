//! Calendar value types used by the dk-modelfields field adapters.
//!
//! The model fields map database columns to three value types that the
//! standard library and [`chrono`] do not provide directly:
//!
//! - [`Month`] — a calendar month without a day component (DATE columns).
//! - [`Year`] — a calendar year (YEAR(4) columns).
//! - [`Duration`] — an elapsed time span with lenient text parsing
//!   (BIGINT second columns).
//!
//! All three are immutable, `Copy`-cheap value types with `Display`
//! implementations matching their form/serialization text form.

pub mod duration;
pub mod month;
pub mod year;

pub use duration::Duration;
pub use month::Month;
pub use year::Year;

use thiserror::Error;

/// Errors from parsing or constructing calendar values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalError {
    /// Not a valid month (bad text form or month number outside 1..=12).
    #[error("invalid month: {0:?}")]
    InvalidMonth(String),

    /// Not a valid year.
    #[error("invalid year: {0:?}")]
    InvalidYear(String),

    /// Not a valid duration text form.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),
}
