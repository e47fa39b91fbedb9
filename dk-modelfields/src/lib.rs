//! # dk-modelfields
//!
//! Custom model field types for Django-style ORMs in Rust.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access; depend on the individual crates for finer-grained control.
//!
//! ```
//! use dk_modelfields::db::{ModelField, StatusField, Value};
//!
//! let status = StatusField::new("
//!     new    Brand new     # [init]
//!     sale   Invoiced      # [done]
//! ");
//! let v = status.to_python(Value::from("sale")).unwrap();
//! assert_eq!(v.as_status().unwrap().verbose(), "Invoiced");
//! ```

/// Error types and logging setup.
pub use dk_modelfields_core as core;

/// Calendar value types: `Month`, `Year`, `Duration`.
pub use dk_modelfields_cal as cal;

/// Model field adapters and the status definition engine.
pub use dk_modelfields_db as db;

/// Admin form-field conversion.
pub use dk_modelfields_forms as forms;
