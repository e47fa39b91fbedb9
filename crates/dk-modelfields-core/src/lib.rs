//! Core types for the dk-modelfields crates.
//!
//! Provides the shared [`FieldError`] type used by every field adapter and
//! the [`logging`] setup helper.

pub mod error;
pub mod logging;

pub use error::{FieldError, ValidationError};
