/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! JSON document decoder.
//!
//! Maps keys to declared field names and converts values using the declared
//! field type. A value whose JSON shape does not fit its declared type is
//! kept by shape, so the validator can report it instead of the decoder
//! rejecting the whole document.

use crate::EXT_KEY;
use adcom_core::error::DecodeError;
use adcom_core::field::FieldValue;
use adcom_core::object::Object;
use adcom_schema::schema::{FieldDef, FieldType, MessageDef, ScalarType, Schema};
use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::debug;

/// Schema-aware JSON decoder.
#[derive(Debug, Clone, Copy)]
pub struct JsonDecoder<'s> {
    /// Schema used to resolve keys and types.
    schema: &'s Schema,
    /// Whether unknown keys are rejected.
    strict: bool,
}

impl<'s> JsonDecoder<'s> {
    /// Creates a lenient decoder.
    ///
    /// # Arguments
    /// * `schema` - The schema describing the documents
    #[inline]
    #[must_use]
    pub const fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            strict: false,
        }
    }

    /// Sets whether unknown keys fail decoding instead of being skipped.
    #[inline]
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Decodes a parsed document as an instance of `message_type`.
    ///
    /// # Errors
    /// Returns `DecodeError` if the root is not a JSON object, a nested
    /// object appears in a scalar field, the `ext` entry is malformed, an
    /// unknown key is found in strict mode, or `message_type` is not
    /// registered.
    pub fn decode(&self, message_type: &str, document: &Value) -> Result<Object, DecodeError> {
        let message = self.schema.message(message_type)?;
        self.decode_message(message, document)
    }

    /// Parses and decodes a document.
    ///
    /// # Errors
    /// Returns `DecodeError::Syntax` if `input` is not valid JSON, otherwise
    /// as [`decode`](Self::decode).
    pub fn decode_slice(&self, message_type: &str, input: &[u8]) -> Result<Object, DecodeError> {
        let document: Value = serde_json::from_slice(input).map_err(|e| DecodeError::Syntax {
            reason: e.to_string(),
        })?;
        self.decode(message_type, &document)
    }

    fn decode_message(&self, message: &MessageDef, document: &Value) -> Result<Object, DecodeError> {
        let Value::Object(map) = document else {
            return Err(DecodeError::ExpectedObject {
                message_type: message.name.clone(),
            });
        };

        let mut object = Object::new();
        for (key, value) in map {
            let Some(field) = message.get_field_by_name(key) else {
                if key == EXT_KEY {
                    decode_extensions(&mut object, value)?;
                } else if self.strict {
                    return Err(DecodeError::UnknownField {
                        message_type: message.name.clone(),
                        field: key.clone(),
                    });
                } else {
                    debug!(message_type = %message.name, key = %key, "unknown key skipped");
                }
                continue;
            };
            if value.is_null() {
                continue;
            }
            object.set(field.number, self.decode_field(field, value)?);
        }
        Ok(object)
    }

    fn decode_field(&self, field: &FieldDef, value: &Value) -> Result<FieldValue, DecodeError> {
        match value {
            // A singular bytes field is itself an array of octets.
            Value::Array(_) if !field.is_repeated() && is_bytes(field) => {
                self.decode_value(field, value)
            }
            Value::Array(items) => items
                .iter()
                .filter(|item| !item.is_null())
                .map(|item| self.decode_value(field, item))
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List),
            other => self.decode_value(field, other),
        }
    }

    fn decode_value(&self, field: &FieldDef, value: &Value) -> Result<FieldValue, DecodeError> {
        match (&field.field_type, value) {
            (FieldType::Message(name), Value::Object(_)) => {
                let nested = self.schema.message(name)?;
                self.decode_message(nested, value).map(FieldValue::from)
            }
            (FieldType::Enum(_), Value::Number(n)) => {
                match n.as_i64().and_then(|code| i32::try_from(code).ok()) {
                    Some(code) => Ok(FieldValue::Enum(code)),
                    None => by_shape(&field.name, value),
                }
            }
            (FieldType::Enum(name), Value::String(symbol)) => {
                match self.schema.enums().code_of(name, symbol)? {
                    Some(code) => Ok(FieldValue::Enum(code)),
                    None => Ok(FieldValue::String(symbol.clone())),
                }
            }
            (FieldType::Scalar(ScalarType::Bool), Value::Number(n)) => match n.as_u64() {
                Some(0) => Ok(FieldValue::Bool(false)),
                Some(1) => Ok(FieldValue::Bool(true)),
                _ => by_shape(&field.name, value),
            },
            (FieldType::Scalar(ScalarType::Int64), Value::String(s)) => Ok(s
                .parse::<i64>()
                .map_or_else(|_| FieldValue::String(s.clone()), FieldValue::Int)),
            (FieldType::Scalar(ScalarType::UInt64), Value::String(s)) => Ok(s
                .parse::<u64>()
                .map_or_else(|_| FieldValue::String(s.clone()), FieldValue::UInt)),
            (FieldType::Scalar(ScalarType::Bytes), Value::Array(items)) => {
                let octets: Option<Vec<u8>> = items
                    .iter()
                    .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                    .collect();
                match octets {
                    Some(octets) => Ok(FieldValue::Bytes(Bytes::from(octets))),
                    None => by_shape(&field.name, value),
                }
            }
            (FieldType::Scalar(_) | FieldType::Enum(_), Value::Object(_)) => {
                Err(DecodeError::UnexpectedObject {
                    field: field.name.clone(),
                })
            }
            _ => by_shape(&field.name, value),
        }
    }
}

fn is_bytes(field: &FieldDef) -> bool {
    field.field_type == FieldType::Scalar(ScalarType::Bytes)
}

/// Converts a value using only its JSON shape.
fn by_shape(field: &str, value: &Value) -> Result<FieldValue, DecodeError> {
    match value {
        Value::Bool(b) => Ok(FieldValue::Bool(*b)),
        Value::Number(n) => Ok(if let Some(i) = n.as_i64() {
            FieldValue::Int(i)
        } else if let Some(u) = n.as_u64() {
            FieldValue::UInt(u)
        } else {
            FieldValue::Double(n.as_f64().unwrap_or_default())
        }),
        Value::String(s) => Ok(FieldValue::String(s.clone())),
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(|item| by_shape(field, item))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldValue::List),
        Value::Object(_) => Err(DecodeError::UnexpectedObject {
            field: field.to_string(),
        }),
        // Callers drop nulls before converting.
        Value::Null => Ok(FieldValue::List(Vec::new())),
    }
}

fn decode_extensions(object: &mut Object, value: &Value) -> Result<(), DecodeError> {
    let entries: &Map<String, Value> = match value {
        Value::Object(entries) => entries,
        Value::Null => return Ok(()),
        _ => {
            return Err(DecodeError::InvalidExtension {
                key: EXT_KEY.to_string(),
                reason: "expected an object keyed by field number".to_string(),
            });
        }
    };
    for (key, payload) in entries {
        let number: u32 = key.parse().map_err(|_| DecodeError::InvalidExtension {
            key: key.clone(),
            reason: "key is not a field number".to_string(),
        })?;
        let raw = serde_json::to_vec(payload).map_err(|e| DecodeError::InvalidExtension {
            key: key.clone(),
            reason: e.to_string(),
        })?;
        object.set_extension(number, Bytes::from(raw))?;
    }
    Ok(())
}
