//! Admin form support for the custom model fields.
//!
//! Each form field converts raw submitted text into the matching domain
//! value via `clean`, reporting failures as validation errors. Rendering
//! the widgets is the host framework's business; these types only own the
//! conversion and the choice lists.

pub mod fields;

pub use fields::{DurationFormField, MonthFormField, StatusSelectField, YearFormField};
