/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for AdCOM processing.
//!
//! This module provides a unified error hierarchy using `thiserror`. Schema
//! misconfiguration is reported through [`ConfigError`] and is always fatal;
//! data-shape problems are never errors here, they are returned as validation
//! issues by the validator.

use thiserror::Error;

/// Result type alias using [`AdcomError`] as the error type.
pub type Result<T> = std::result::Result<T, AdcomError>;

/// Top-level error type for all AdCOM operations.
#[derive(Debug, Error)]
pub enum AdcomError {
    /// Schema or registry misconfiguration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error while decoding a document into an object.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error while encoding an object into a document.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Schema descriptor and enum registry misconfiguration.
///
/// These indicate a wiring or build bug, never bad input, and are raised at
/// startup when the schema is built or when a caller names a type the schema
/// does not know.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Message type is not registered in the schema.
    #[error("unknown message type: {0}")]
    UnknownMessage(String),

    /// Message type does not declare the named field.
    #[error("unknown field {message}.{field}")]
    UnknownField {
        /// Message type name.
        message: String,
        /// Field name.
        field: String,
    },

    /// Enum type is not registered in the registry.
    #[error("unknown enum type: {0}")]
    UnknownEnum(String),

    /// Two message definitions share a name.
    #[error("duplicate message type: {0}")]
    DuplicateMessage(String),

    /// Two enum definitions share a name.
    #[error("duplicate enum type: {0}")]
    DuplicateEnum(String),

    /// Two fields of one message share a number.
    #[error("duplicate field number {number} in {message}")]
    DuplicateFieldNumber {
        /// Message type name.
        message: String,
        /// The repeated field number.
        number: u32,
    },

    /// Two fields of one message share a name.
    #[error("duplicate field name '{field}' in {message}")]
    DuplicateFieldName {
        /// Message type name.
        message: String,
        /// The repeated field name.
        field: String,
    },

    /// Field number is zero or beyond the maximum.
    #[error("invalid field number {number} for {message}.{field}")]
    InvalidFieldNumber {
        /// Message type name.
        message: String,
        /// Field name.
        field: String,
        /// The offending number.
        number: u32,
    },

    /// Field number falls inside the vendor extension range.
    #[error("field {message}.{field} uses reserved extension number {number}")]
    ReservedFieldNumber {
        /// Message type name.
        message: String,
        /// Field name.
        field: String,
        /// The offending number.
        number: u32,
    },

    /// Field references a message or enum type that is not declared.
    #[error("field {message}.{field} references undeclared type {type_name}")]
    UnresolvedType {
        /// Message type name.
        message: String,
        /// Field name.
        field: String,
        /// The unresolved type name.
        type_name: String,
    },

    /// Malformed oneof group.
    #[error("invalid oneof group {message}.{group}: {reason}")]
    InvalidOneof {
        /// Message type name.
        message: String,
        /// Group name.
        group: String,
        /// Description of the problem.
        reason: String,
    },

    /// Declared default does not fit its field.
    #[error("invalid default for {message}.{field}: {reason}")]
    InvalidDefault {
        /// Message type name.
        message: String,
        /// Field name.
        field: String,
        /// Description of the problem.
        reason: String,
    },

    /// Malformed enum definition.
    #[error("invalid enum {name}: {reason}")]
    InvalidEnum {
        /// Enum type name.
        name: String,
        /// Description of the problem.
        reason: String,
    },

    /// Nested type whose enclosing message is not declared.
    #[error("nested type {message} has undeclared parent {parent}")]
    OrphanNestedType {
        /// Nested message type name.
        message: String,
        /// Missing parent name.
        parent: String,
    },

    /// Message types reference each other in a cycle.
    #[error("cyclic message reference: {path}")]
    CyclicReference {
        /// The cycle, rendered as `A -> B -> A`.
        path: String,
    },
}

/// Errors that occur while decoding a document into an [`Object`](crate::Object).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input is not a well-formed document.
    #[error("malformed document: {reason}")]
    Syntax {
        /// Parser error description.
        reason: String,
    },

    /// Expected a document object for a message type.
    #[error("expected an object for message type {message_type}")]
    ExpectedObject {
        /// The message type being decoded.
        message_type: String,
    },

    /// Document names a field the schema does not declare (strict mode).
    #[error("unknown field '{field}' in {message_type}")]
    UnknownField {
        /// The message type being decoded.
        message_type: String,
        /// The unknown key.
        field: String,
    },

    /// A nested document appeared where a scalar was declared.
    #[error("unexpected nested object in field '{field}'")]
    UnexpectedObject {
        /// The field name.
        field: String,
    },

    /// Malformed vendor extension entry.
    #[error("invalid extension '{key}': {reason}")]
    InvalidExtension {
        /// The extension key as it appeared in the document.
        key: String,
        /// Description of the problem.
        reason: String,
    },

    /// Extension number outside the vendor extension range.
    #[error("extension number {number} is outside the vendor range 100..=9999")]
    ExtensionOutOfRange {
        /// The offending number.
        number: u32,
    },

    /// Schema lookup failed while decoding.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that occur while encoding an [`Object`](crate::Object) into a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Extension bytes are not representable in the target encoding.
    #[error("opaque extension {number} cannot be encoded: {reason}")]
    OpaqueExtension {
        /// The extension field number.
        number: u32,
        /// Description of the problem.
        reason: String,
    },

    /// Floating point value is NaN or infinite.
    #[error("non-finite number in field '{field}'")]
    NonFiniteNumber {
        /// The field name.
        field: String,
    },

    /// Nested object found in a field not declared as a message.
    #[error("field '{field}' holds an object but is not a message field")]
    UnexpectedObject {
        /// The field name.
        field: String,
    },

    /// Schema lookup failed while encoding.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
