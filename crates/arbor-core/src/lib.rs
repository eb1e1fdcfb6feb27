//! Core capabilities for arbor.
//!
//! This crate provides the foundational pieces shared by the item model:
//!
//! - **Error Types**: Index, type-mismatch, and property failures
//! - **Property System**: Typed values with name-based dynamic access
//!
//! # Property Example
//!
//! ```
//! use arbor_core::PropertyValue;
//!
//! let value = PropertyValue::from("Green");
//! assert_eq!(value.as_str(), Some("Green"));
//! assert_eq!(value.type_name(), "string");
//!
//! // Converting to the wrong kind reports a type mismatch
//! assert!(PropertyValue::from(42).into_string("name").is_err());
//! ```

pub mod error;
pub mod property;

pub use error::{Error, Result};
pub use property::{Properties, PropertyValue};
