/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema definitions for AdCOM message types.
//!
//! This module defines the structures that describe a compiled schema:
//! - [`FieldDef`]: Field definitions with number, name, type, and default
//! - [`MessageDef`]: Message definitions with fields and oneof groups
//! - [`OneofDef`]: Mutually exclusive field groups
//! - [`EnumDef`]: Enumerated lists of symbolic codes
//! - [`Schema`]: The complete, validated set of messages and enums

use crate::registry::EnumRegistry;
use adcom_core::error::ConfigError;
use adcom_core::field::{FieldNumber, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scalar field data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
    /// Raw bytes.
    Bytes,
}

impl ScalarType {
    /// Returns true if `value` is a well-formed instance of this type.
    ///
    /// Integers are range-checked against the declared width. Floating point
    /// fields also accept integral values.
    #[must_use]
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Bool, FieldValue::Bool(_)) => true,
            (Self::Int32, FieldValue::Int(v)) => i32::try_from(*v).is_ok(),
            (Self::Int64, FieldValue::Int(_)) => true,
            (Self::UInt32, FieldValue::UInt(v)) => u32::try_from(*v).is_ok(),
            (Self::UInt32, FieldValue::Int(v)) => u32::try_from(*v).is_ok(),
            (Self::UInt64, FieldValue::UInt(_)) => true,
            (Self::UInt64, FieldValue::Int(v)) => *v >= 0,
            (Self::Float | Self::Double, FieldValue::Double(_) | FieldValue::Int(_)) => true,
            (Self::String, FieldValue::String(_)) => true,
            (Self::Bytes, FieldValue::Bytes(_)) => true,
            _ => false,
        }
    }

    /// Returns the schema-language name of this type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Scalar value.
    Scalar(ScalarType),
    /// Nested message, by full type name.
    Message(String),
    /// Enum code, by enum name.
    Enum(String),
}

impl FieldType {
    /// Returns true if this is a message reference.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Returns true if this is an enum reference.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the referenced message or enum name, if any.
    #[must_use]
    pub fn referenced_type(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Message(name) | Self::Enum(name) => Some(name),
        }
    }

    /// Returns true if `value` has the shape this type requires.
    ///
    /// Enum membership and nested message contents are not checked here.
    #[must_use]
    pub fn accepts_shape(&self, value: &FieldValue) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.accepts(value),
            Self::Message(_) => matches!(value, FieldValue::Message(_)),
            Self::Enum(_) => matches!(value, FieldValue::Enum(_)),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.name()),
            Self::Message(name) => write!(f, "message {}", name),
            Self::Enum(name) => write!(f, "enum {}", name),
        }
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cardinality {
    /// At most one value.
    #[default]
    Singular,
    /// Zero or more values.
    Repeated,
}

/// Definition of a message field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field number.
    pub number: u32,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Singular or repeated.
    pub cardinality: Cardinality,
    /// Oneof group this field belongs to. Assigned by the schema builder.
    pub oneof: Option<String>,
    /// Declared default applied by the normalizer.
    pub default: Option<FieldValue>,
    /// Whether the attribute is required in a valid instance.
    pub required: bool,
    /// Field description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a new singular field definition.
    ///
    /// # Arguments
    /// * `number` - The field number
    /// * `name` - The field name
    /// * `field_type` - The field data type
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            number,
            name: name.into(),
            field_type,
            cardinality: Cardinality::Singular,
            oneof: None,
            default: None,
            required: false,
            description: None,
        }
    }

    /// Creates a bool field.
    #[must_use]
    pub fn boolean(number: u32, name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Scalar(ScalarType::Bool))
    }

    /// Creates an int32 field.
    #[must_use]
    pub fn int32(number: u32, name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Scalar(ScalarType::Int32))
    }

    /// Creates an int64 field.
    #[must_use]
    pub fn int64(number: u32, name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Scalar(ScalarType::Int64))
    }

    /// Creates a double field.
    #[must_use]
    pub fn double(number: u32, name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Scalar(ScalarType::Double))
    }

    /// Creates a string field.
    #[must_use]
    pub fn string(number: u32, name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Scalar(ScalarType::String))
    }

    /// Creates an enum field.
    #[must_use]
    pub fn enumeration(number: u32, name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Enum(enum_name.into()))
    }

    /// Creates a nested message field.
    #[must_use]
    pub fn message(number: u32, name: impl Into<String>, message_name: impl Into<String>) -> Self {
        Self::new(number, name, FieldType::Message(message_name.into()))
    }

    /// Marks the field as repeated.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    /// Declares a default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the declared default, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&FieldValue> {
        self.default.as_ref()
    }

    /// Returns the field number.
    #[inline]
    #[must_use]
    pub const fn field_number(&self) -> FieldNumber {
        FieldNumber::new(self.number)
    }

    /// Returns true if the field is repeated.
    #[inline]
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

/// Definition of a oneof group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneofDef {
    /// Group name.
    pub name: String,
    /// Member field names.
    pub fields: Vec<String>,
}

impl OneofDef {
    /// Creates a new oneof group.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            name: name.into(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// Returns true if the named field is a member.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Definition of a message type.
///
/// Nested types are named `Parent.Child`; the schema builder links them to
/// their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Full message type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Oneof groups.
    pub oneofs: Vec<OneofDef>,
    /// Names of nested message types. Assigned by the schema builder.
    pub nested: Vec<String>,
    /// Message description.
    pub description: Option<String>,
}

impl MessageDef {
    /// Creates a new empty message definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            oneofs: Vec::new(),
            nested: Vec::new(),
            description: None,
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a oneof group over previously or subsequently declared fields.
    #[must_use]
    pub fn oneof(mut self, name: impl Into<String>, fields: &[&str]) -> Self {
        self.oneofs.push(OneofDef::new(name, fields));
        self
    }

    /// Adds a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Gets a field definition by number.
    #[must_use]
    pub fn get_field(&self, number: impl Into<FieldNumber>) -> Option<&FieldDef> {
        let number = number.into().value();
        self.fields.iter().find(|f| f.number == number)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Gets a oneof group by name.
    #[must_use]
    pub fn get_oneof(&self, name: &str) -> Option<&OneofDef> {
        self.oneofs.iter().find(|o| o.name == name)
    }

    /// Returns the enclosing type name for nested types.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(parent, _)| parent)
    }

    /// Returns the unqualified type name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, short)| short)
    }
}

/// A symbolic enum entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Symbolic name.
    pub symbol: String,
    /// Integer code.
    pub code: i32,
}

/// Definition of an enumerated list.
///
/// Code 0 is never declared: it is the implicit "unknown/unset" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Declared entries.
    pub values: Vec<EnumValue>,
    /// Enum description.
    pub description: Option<String>,
}

impl EnumDef {
    /// Creates a new empty enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            description: None,
        }
    }

    /// Creates an enum definition from `(symbol, code)` pairs.
    #[must_use]
    pub fn from_pairs<'a>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, i32)>,
    ) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(name), |def, (symbol, code)| def.value(symbol, code))
    }

    /// Adds an entry.
    #[must_use]
    pub fn value(mut self, symbol: impl Into<String>, code: i32) -> Self {
        self.values.push(EnumValue {
            symbol: symbol.into(),
            code,
        });
        self
    }

    /// Returns true if `code` is declared.
    #[must_use]
    pub fn contains(&self, code: i32) -> bool {
        self.values.iter().any(|v| v.code == code)
    }

    /// Returns the symbol declared for `code`.
    #[must_use]
    pub fn symbol_of(&self, code: i32) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.code == code)
            .map(|v| v.symbol.as_str())
    }

    /// Returns the code declared for `symbol`.
    #[must_use]
    pub fn code_of(&self, symbol: &str) -> Option<i32> {
        self.values.iter().find(|v| v.symbol == symbol).map(|v| v.code)
    }
}

/// Complete, validated schema.
///
/// Built once by [`SchemaBuilder`](crate::SchemaBuilder) and read-only
/// afterwards; share it behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Schema version label.
    pub(crate) version: String,
    /// Message definitions indexed by full name.
    pub(crate) messages: HashMap<String, MessageDef>,
    /// Enum definitions.
    pub(crate) enums: EnumRegistry,
}

impl Schema {
    /// Returns the schema version label.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Gets a message definition by name.
    #[must_use]
    pub fn get_message(&self, name: &str) -> Option<&MessageDef> {
        self.messages.get(name)
    }

    /// Gets a message definition, failing for unregistered names.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `name` is not registered.
    pub fn message(&self, name: &str) -> Result<&MessageDef, ConfigError> {
        self.messages
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMessage(name.to_string()))
    }

    /// Returns true if the message type is registered.
    #[must_use]
    pub fn contains_message(&self, name: &str) -> bool {
        self.messages.contains_key(name)
    }

    /// Returns the fields of a message type in declaration order.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `name` is not registered.
    pub fn fields_of(&self, name: &str) -> Result<&[FieldDef], ConfigError> {
        self.message(name).map(|m| m.fields.as_slice())
    }

    /// Returns the oneof groups of a message type.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `name` is not registered.
    pub fn oneof_groups_of(&self, name: &str) -> Result<&[OneofDef], ConfigError> {
        self.message(name).map(|m| m.oneofs.as_slice())
    }

    /// Returns the names of the types nested in a message type.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `name` is not registered.
    pub fn nested_of(&self, name: &str) -> Result<&[String], ConfigError> {
        self.message(name).map(|m| m.nested.as_slice())
    }

    /// Returns the declared default of a field.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` or `ConfigError::UnknownField`
    /// if either name is not registered.
    pub fn default_of(&self, message: &str, field: &str) -> Result<Option<&FieldValue>, ConfigError> {
        let def = self.message(message)?;
        def.get_field_by_name(field)
            .map(FieldDef::default_value)
            .ok_or_else(|| ConfigError::UnknownField {
                message: message.to_string(),
                field: field.to_string(),
            })
    }

    /// Gets a field of a message type by number.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `message` is not registered.
    pub fn field_by_number(
        &self,
        message: &str,
        number: impl Into<FieldNumber>,
    ) -> Result<Option<&FieldDef>, ConfigError> {
        self.message(message).map(|m| m.get_field(number))
    }

    /// Gets a field of a message type by name.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `message` is not registered.
    pub fn field_by_name(&self, message: &str, field: &str) -> Result<Option<&FieldDef>, ConfigError> {
        self.message(message).map(|m| m.get_field_by_name(field))
    }

    /// Returns all enum names, sorted.
    #[must_use]
    pub fn enum_names(&self) -> Vec<&str> {
        self.enums.names()
    }

    /// Returns all message names, sorted.
    #[must_use]
    pub fn message_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns an iterator over all message definitions.
    pub fn messages(&self) -> impl Iterator<Item = &MessageDef> {
        self.messages.values()
    }

    /// Returns the enum registry.
    #[must_use]
    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcom_core::object::Object;

    #[test]
    fn test_scalar_type_accepts() {
        assert!(ScalarType::Int32.accepts(&FieldValue::Int(42)));
        assert!(!ScalarType::Int32.accepts(&FieldValue::Int(i64::from(i32::MAX) + 1)));
        assert!(ScalarType::Int64.accepts(&FieldValue::Int(i64::MAX)));
        assert!(ScalarType::UInt32.accepts(&FieldValue::Int(7)));
        assert!(!ScalarType::UInt32.accepts(&FieldValue::Int(-1)));
        assert!(ScalarType::Double.accepts(&FieldValue::Int(2)));
        assert!(!ScalarType::Bool.accepts(&FieldValue::Int(1)));
        assert!(!ScalarType::String.accepts(&FieldValue::Enum(1)));
    }

    #[test]
    fn test_field_type_accepts_shape() {
        let enum_type = FieldType::Enum("SizeUnit".to_string());
        assert!(enum_type.accepts_shape(&FieldValue::Enum(99)));
        assert!(!enum_type.accepts_shape(&FieldValue::Int(1)));

        let msg_type = FieldType::Message("Geo".to_string());
        assert!(msg_type.accepts_shape(&FieldValue::from(Object::new())));
        assert_eq!(msg_type.referenced_type(), Some("Geo"));
        assert_eq!(msg_type.to_string(), "message Geo");
    }

    #[test]
    fn test_field_def_builders() {
        let field = FieldDef::boolean(24, "boxing").with_default(true);
        assert_eq!(field.default_value(), Some(&FieldValue::Bool(true)));
        assert!(!field.is_repeated());

        let field = FieldDef::string(10, "mime").repeated();
        assert!(field.is_repeated());
        assert_eq!(field.field_number(), FieldNumber::new(10));
    }

    #[test]
    fn test_message_def_lookups() {
        let msg = MessageDef::new("DisplayPlacement.EventSpec")
            .field(FieldDef::int32(1, "type"))
            .field(FieldDef::boolean(5, "wjs"))
            .oneof("tracker", &["type", "wjs"]);

        assert_eq!(msg.get_field(5u32).map(|f| f.name.as_str()), Some("wjs"));
        assert_eq!(msg.get_field_by_name("type").map(|f| f.number), Some(1));
        assert!(msg.get_field(9u32).is_none());
        assert!(msg.get_oneof("tracker").is_some_and(|o| o.contains("wjs")));
        assert_eq!(msg.parent(), Some("DisplayPlacement"));
        assert_eq!(msg.short_name(), "EventSpec");
    }

    #[test]
    fn test_enum_def_lookups() {
        let def = EnumDef::from_pairs("SizeUnit", [("DIPS", 1), ("INCHES", 2)]);
        assert!(def.contains(1));
        assert!(!def.contains(0));
        assert_eq!(def.symbol_of(2), Some("INCHES"));
        assert_eq!(def.code_of("DIPS"), Some(1));
    }
}
