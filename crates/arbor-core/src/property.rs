//! Dynamic property access for model entities.
//!
//! Entities expose their fields through a typed value enum plus a pair of
//! name-based accessors. This replaces string-keyed "property bag" access with
//! something a caller can still drive dynamically (for example from parsed
//! POST data) while every field stays an explicit, typed struct member
//! underneath.
//!
//! # Example
//!
//! ```ignore
//! use arbor_core::{Properties, PropertyValue};
//!
//! let mut item = some_entity();
//! item.set_property("name", PropertyValue::from("Green"))?;
//! assert_eq!(item.property("name")?.as_str(), Some("Green"));
//!
//! // Unknown names fail with Error::UnknownProperty
//! assert!(item.property("font").is_err());
//! ```

use crate::error::{Error, Result};

/// A typed value travelling through the dynamic property surface.
///
/// `Null` models an unset optional field; reading an unset field yields
/// `Null` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyValue {
    /// No value / unset optional field.
    #[default]
    Null,
    /// String data.
    String(String),
    /// Integer data.
    Int(i64),
    /// Boolean data.
    Bool(bool),
}

impl PropertyValue {
    /// Returns `true` if this is `PropertyValue::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::String(_) => "string",
            PropertyValue::Int(_) => "int",
            PropertyValue::Bool(_) => "bool",
        }
    }

    /// Converts into an optional string, failing with [`Error::TypeMismatch`]
    /// for non-string kinds. `Null` maps to `None` (clears the field).
    pub fn into_string(self, property: &str) -> Result<Option<String>> {
        match self {
            PropertyValue::Null => Ok(None),
            PropertyValue::String(s) => Ok(Some(s)),
            other => Err(Error::type_mismatch(property, "string", other.type_name())),
        }
    }

    /// Converts into a boolean, failing with [`Error::TypeMismatch`] for
    /// non-boolean kinds.
    pub fn into_bool(self, property: &str) -> Result<bool> {
        match self {
            PropertyValue::Bool(b) => Ok(b),
            other => Err(Error::type_mismatch(property, "bool", other.type_name())),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Int(n as i64)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<Option<String>> for PropertyValue {
    fn from(opt: Option<String>) -> Self {
        match opt {
            Some(s) => PropertyValue::String(s),
            None => PropertyValue::Null,
        }
    }
}

impl From<Option<&str>> for PropertyValue {
    fn from(opt: Option<&str>) -> Self {
        match opt {
            Some(s) => PropertyValue::String(s.to_string()),
            None => PropertyValue::Null,
        }
    }
}

/// Name-based property access on a model entity.
///
/// Implementors map a fixed set of property names onto their typed fields.
/// Unrecognized names fail with [`Error::UnknownProperty`]; writes carrying
/// the wrong value kind fail with [`Error::TypeMismatch`]; derived properties
/// reject writes with [`Error::ReadOnly`].
pub trait Properties {
    /// The entity name reported in property errors.
    fn entity_name(&self) -> &'static str;

    /// Reads the property with the given name.
    fn property(&self, name: &str) -> Result<PropertyValue>;

    /// Writes the property with the given name.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()>;
}
