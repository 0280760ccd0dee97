/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Field numbers and dynamic field values.
//!
//! This module provides:
//! - [`FieldNumber`]: Type-safe wrapper for schema field numbers
//! - [`FieldValue`]: Enumeration of the values a decoded field can hold
//! - [`ValueKind`]: The shape of a value, used in diagnostics

use crate::object::Object;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Field numbers reserved for vendor-specific extensions.
pub const EXTENSION_RANGE: RangeInclusive<u32> = 100..=9999;

/// Largest field number the schema compiler accepts.
pub const MAX_FIELD_NUMBER: u32 = 536_870_911;

/// Schema field number.
///
/// Declared fields use numbers below 100 in AdCOM. Numbers in
/// [`EXTENSION_RANGE`] carry vendor data the validator never inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldNumber(u32);

impl FieldNumber {
    /// Creates a new field number.
    ///
    /// # Arguments
    /// * `number` - The raw field number
    #[inline]
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the raw field number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this number falls in the vendor extension range.
    #[inline]
    #[must_use]
    pub const fn is_extension(self) -> bool {
        self.0 >= *EXTENSION_RANGE.start() && self.0 <= *EXTENSION_RANGE.end()
    }

    /// Returns true if a schema may declare a field with this number.
    #[inline]
    #[must_use]
    pub const fn is_declarable(self) -> bool {
        self.0 >= 1 && self.0 <= MAX_FIELD_NUMBER && !self.is_extension()
    }
}

impl From<u32> for FieldNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

impl From<FieldNumber> for u32 {
    fn from(number: FieldNumber) -> Self {
        number.0
    }
}

impl fmt::Display for FieldNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// Floating point.
    Double,
    /// UTF-8 string.
    String,
    /// Raw bytes.
    Bytes,
    /// Enum code.
    Enum,
    /// Nested object.
    Message,
    /// Repeated values.
    List,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum => "enum",
            Self::Message => "message",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// Value held by a populated field of an [`Object`].
///
/// 32 and 64 bit integers share the `Int`/`UInt` variants; the schema
/// descriptor decides which widths a field accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Floating point value.
    Double(f64),
    /// String value.
    String(String),
    /// Raw bytes.
    Bytes(Bytes),
    /// Enum code. Zero means unknown or unset.
    Enum(i32),
    /// Nested object.
    Message(Box<Object>),
    /// Elements of a repeated field.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Enum(_) => ValueKind::Enum,
            Self::Message(_) => ValueKind::Message,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Returns the value as a bool, if it is a Bool variant.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Int variant.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a u64, if it is a UInt variant.
    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an f64, if it is a Double variant.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string, if it is a String variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the enum code, if it is an Enum variant.
    #[must_use]
    pub const fn as_enum(&self) -> Option<i32> {
        match self {
            Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the nested object, if it is a Message variant.
    #[must_use]
    pub fn as_message(&self) -> Option<&Object> {
        match self {
            Self::Message(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the nested object mutably, if it is a Message variant.
    #[must_use]
    pub fn as_message_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Message(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the elements, if it is a List variant.
    #[must_use]
    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true if this is a List variant.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Object> for FieldValue {
    fn from(v: Object) -> Self {
        Self::Message(Box::new(v))
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(v: Vec<FieldValue>) -> Self {
        Self::List(v)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Self::Enum(code) => write!(f, "#{}", code),
            Self::Message(obj) => write!(f, "{{{} fields}}", obj.field_count()),
            Self::List(items) => write!(f, "[{} items]", items.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_number_ranges() {
        assert!(FieldNumber::new(13).is_declarable());
        assert!(!FieldNumber::new(13).is_extension());

        assert!(FieldNumber::new(100).is_extension());
        assert!(FieldNumber::new(9999).is_extension());
        assert!(!FieldNumber::new(100).is_declarable());

        assert!(FieldNumber::new(10_000).is_declarable());
        assert!(!FieldNumber::new(0).is_declarable());
        assert!(!FieldNumber::new(MAX_FIELD_NUMBER + 1).is_declarable());
    }

    #[test]
    fn test_field_value_accessors() {
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Enum(3).as_enum(), Some(3));
        assert_eq!(FieldValue::Int(7).as_enum(), None);
        assert_eq!(FieldValue::from("dips").as_str(), Some("dips"));
        assert!(FieldValue::List(vec![]).is_list());
    }

    #[test]
    fn test_field_value_kind() {
        assert_eq!(FieldValue::Double(1.5).kind(), ValueKind::Double);
        assert_eq!(FieldValue::from(Object::new()).kind(), ValueKind::Message);
        assert_eq!(ValueKind::UInt.to_string(), "uint");
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Enum(1).to_string(), "#1");
        assert_eq!(FieldValue::from("x").to_string(), "\"x\"");
        assert_eq!(
            FieldValue::List(vec![FieldValue::Int(1), FieldValue::Int(2)]).to_string(),
            "[2 items]"
        );
    }
}
