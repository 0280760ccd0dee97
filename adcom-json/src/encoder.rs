/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! JSON document encoder.
//!
//! Emits declared fields by name and the extension bag under `ext`. Values
//! stored in the field map under a vendor extension number join the bag
//! entries under `ext`, converted by shape. Other undeclared fields have no
//! name to travel under and are dropped.

use crate::EXT_KEY;
use adcom_core::error::EncodeError;
use adcom_core::field::{FieldNumber, FieldValue};
use adcom_core::object::Object;
use adcom_schema::schema::{FieldDef, FieldType, MessageDef, Schema};
use serde_json::{Map, Number, Value};
use tracing::debug;

/// Schema-aware JSON encoder.
#[derive(Debug, Clone, Copy)]
pub struct JsonEncoder<'s> {
    /// Schema used to name fields.
    schema: &'s Schema,
}

impl<'s> JsonEncoder<'s> {
    /// Creates a new encoder.
    #[inline]
    #[must_use]
    pub const fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Encodes an object as an instance of `message_type`.
    ///
    /// # Errors
    /// Returns `EncodeError` if an extension payload is not JSON, a float is
    /// not finite, a nested object sits in a non-message field, or
    /// `message_type` is not registered.
    pub fn encode(&self, object: &Object, message_type: &str) -> Result<Value, EncodeError> {
        let message = self.schema.message(message_type)?;
        self.encode_message(object, message)
    }

    /// Encodes an object to a JSON byte vector.
    ///
    /// # Errors
    /// As [`encode`](Self::encode).
    pub fn encode_vec(&self, object: &Object, message_type: &str) -> Result<Vec<u8>, EncodeError> {
        let document = self.encode(object, message_type)?;
        Ok(document.to_string().into_bytes())
    }

    fn encode_message(&self, object: &Object, message: &MessageDef) -> Result<Value, EncodeError> {
        let mut map = Map::new();
        let mut ext = Map::new();
        for (number, value) in object.fields() {
            match message.get_field(number) {
                Some(field) => {
                    map.insert(field.name.clone(), self.encode_field(field, value)?);
                }
                None if number.is_extension() => {
                    ext.insert(number.to_string(), by_shape(number, value)?);
                }
                None => debug!(message_type = %message.name, %number, "undeclared field dropped"),
            }
        }

        // Bag payloads win over field map values under the same number.
        for (number, payload) in object.extensions() {
            let value: Value =
                serde_json::from_slice(payload).map_err(|e| EncodeError::OpaqueExtension {
                    number: number.value(),
                    reason: e.to_string(),
                })?;
            ext.insert(number.to_string(), value);
        }
        if !ext.is_empty() {
            map.insert(EXT_KEY.to_string(), Value::Object(ext));
        }
        Ok(Value::Object(map))
    }

    fn encode_field(&self, field: &FieldDef, value: &FieldValue) -> Result<Value, EncodeError> {
        match value {
            FieldValue::Bool(b) => Ok(Value::from(u8::from(*b))),
            FieldValue::Int(i) => Ok(Value::from(*i)),
            FieldValue::UInt(u) => Ok(Value::from(*u)),
            FieldValue::Double(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
                EncodeError::NonFiniteNumber {
                    field: field.name.clone(),
                }
            }),
            FieldValue::String(s) => Ok(Value::String(s.clone())),
            FieldValue::Bytes(b) => Ok(Value::Array(b.iter().map(|o| Value::from(*o)).collect())),
            FieldValue::Enum(code) => Ok(Value::from(*code)),
            FieldValue::Message(nested) => match &field.field_type {
                FieldType::Message(name) => {
                    let def = self.schema.message(name)?;
                    self.encode_message(nested, def)
                }
                _ => Err(EncodeError::UnexpectedObject {
                    field: field.name.clone(),
                }),
            },
            FieldValue::List(items) => items
                .iter()
                .map(|item| self.encode_field(field, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
        }
    }
}

/// Converts a value using only its shape, for fields the schema does not
/// name. Nested objects are keyed by field number.
fn by_shape(number: FieldNumber, value: &FieldValue) -> Result<Value, EncodeError> {
    match value {
        FieldValue::Bool(b) => Ok(Value::Bool(*b)),
        FieldValue::Int(i) => Ok(Value::from(*i)),
        FieldValue::UInt(u) => Ok(Value::from(*u)),
        FieldValue::Double(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
            EncodeError::NonFiniteNumber {
                field: number.to_string(),
            }
        }),
        FieldValue::String(s) => Ok(Value::String(s.clone())),
        FieldValue::Bytes(b) => Ok(Value::Array(b.iter().map(|o| Value::from(*o)).collect())),
        FieldValue::Enum(code) => Ok(Value::from(*code)),
        FieldValue::Message(nested) => nested
            .fields()
            .map(|(n, v)| Ok((n.to_string(), by_shape(n, v)?)))
            .collect::<Result<Map<String, Value>, EncodeError>>()
            .map(Value::Object),
        FieldValue::List(items) => items
            .iter()
            .map(|item| by_shape(number, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcom_core::types::SizeUnit;
    use adcom_schema::adcom::{self, names};
    use bytes::Bytes;
    use serde_json::json;

    fn schema() -> Schema {
        adcom::build().unwrap()
    }

    fn number(schema: &Schema, message: &str, field: &str) -> u32 {
        schema.field_by_name(message, field).unwrap().unwrap().number
    }

    #[test]
    fn test_encode_video_placement() {
        let schema = schema();
        let object = Object::new()
            .with(
                number(&schema, names::VIDEO_PLACEMENT, "unit"),
                FieldValue::Enum(SizeUnit::Dips.code()),
            )
            .with(number(&schema, names::VIDEO_PLACEMENT, "boxing"), true)
            .with(
                number(&schema, names::VIDEO_PLACEMENT, "mime"),
                vec![FieldValue::from("video/mp4")],
            );
        let doc = JsonEncoder::new(&schema)
            .encode(&object, names::VIDEO_PLACEMENT)
            .unwrap();
        assert_eq!(doc, json!({"unit": 1, "boxing": 1, "mime": ["video/mp4"]}));
    }

    #[test]
    fn test_encode_nested_and_extensions() {
        let schema = schema();
        let display = Object::new().with(number(&schema, names::DISPLAY_PLACEMENT, "w"), 300i64);
        let mut object = Object::new()
            .with(number(&schema, names::PLACEMENT, "display"), display)
            .with(77u32, "dropped");
        object.set_extension(500u32, &br#"{"vendor":true}"#[..]).unwrap();

        let doc = JsonEncoder::new(&schema).encode(&object, names::PLACEMENT).unwrap();
        assert_eq!(
            doc,
            json!({"display": {"w": 300}, "ext": {"500": {"vendor": true}}})
        );
    }

    #[test]
    fn test_opaque_extension() {
        let schema = schema();
        let mut object = Object::new();
        object
            .set_extension(100u32, Bytes::from_static(&[0xff, 0x00]))
            .unwrap();
        let err = JsonEncoder::new(&schema)
            .encode(&object, names::PLACEMENT)
            .unwrap_err();
        assert!(matches!(err, EncodeError::OpaqueExtension { number: 100, .. }));
    }

    #[test]
    fn test_non_finite_number() {
        let schema = schema();
        let object = Object::new().with(number(&schema, names::GEO, "lat"), f64::NAN);
        let err = JsonEncoder::new(&schema).encode(&object, names::GEO).unwrap_err();
        assert_eq!(
            err,
            EncodeError::NonFiniteNumber {
                field: "lat".to_string()
            }
        );
    }

    #[test]
    fn test_object_in_scalar_field() {
        let schema = schema();
        let object = Object::new().with(number(&schema, names::PLACEMENT, "tagid"), Object::new());
        let err = JsonEncoder::new(&schema)
            .encode(&object, names::PLACEMENT)
            .unwrap_err();
        assert!(matches!(err, EncodeError::UnexpectedObject { .. }));
    }

    #[test]
    fn test_encode_vec() {
        let schema = schema();
        let object = Object::new().with(number(&schema, names::SEGMENT, "id"), "s1");
        let bytes = JsonEncoder::new(&schema).encode_vec(&object, names::SEGMENT).unwrap();
        assert_eq!(bytes, br#"{"id":"s1"}"#);
    }

    #[test]
    fn test_vendor_numbers_in_field_map_kept_under_ext() {
        let schema = schema();
        let tagid = number(&schema, names::PLACEMENT, "tagid");
        let object = Object::new()
            .with(tagid, "t")
            .with(500u32, "vendor")
            .with(501u32, Object::new().with(1u32, 7i64).with(2u32, true));

        let doc = JsonEncoder::new(&schema).encode(&object, names::PLACEMENT).unwrap();
        assert_eq!(
            doc,
            json!({"tagid": "t", "ext": {"500": "vendor", "501": {"1": 7, "2": true}}})
        );

        let back = crate::JsonDecoder::new(&schema)
            .decode(names::PLACEMENT, &doc)
            .unwrap();
        assert_eq!(back.get(tagid).and_then(FieldValue::as_str), Some("t"));
        assert_eq!(
            back.extension(500u32).map(|b| b.to_vec()),
            Some(br#""vendor""#.to_vec())
        );
    }

    #[test]
    fn test_extension_bag_wins_over_field_map() {
        let schema = schema();
        let mut object = Object::new().with(500u32, "stale");
        object.set_extension(500u32, &br#"{"fresh":1}"#[..]).unwrap();
        let doc = JsonEncoder::new(&schema).encode(&object, names::PLACEMENT).unwrap();
        assert_eq!(doc, json!({"ext": {"500": {"fresh": 1}}}));
    }
}
