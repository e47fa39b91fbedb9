//! Model field adapters for Django-style ORMs in Rust.
//!
//! Each field type converts between three representations of the same
//! datum: the database storage value, the in-memory domain value, and the
//! form/serialization text form. The conversions are the ORM extension
//! points of the [`fields::ModelField`] trait:
//!
//! - `to_python` — storage or form input to domain value,
//! - `get_prep_value` — domain value to query parameter,
//! - `get_prep_lookup` — lookup argument to storage predicate values,
//! - `value_to_string` — domain value to serialized text.
//!
//! The interesting part is the status field: [`fields::StatusDef`] parses a
//! human-authored definition block into named, categorized enumeration
//! values and answers the category-membership queries used when building
//! `IN (...)` predicates.

pub mod fields;
pub mod lookups;
pub mod validators;
pub mod value;

pub use fields::{
    DurationField, GateField, ModelField, MonthField, PostnrField, PoststedField, StatusDef,
    StatusField, StatusValue, TelefonField, TelephoneField, YearField,
};
pub use value::Value;
