/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Decoded AdCOM object instances.
//!
//! An [`Object`] is the runtime form of one message: populated fields keyed
//! by number, plus an opaque bag of vendor extensions. It is owned by whoever
//! decoded it; validators and normalizers only borrow it.

use crate::error::DecodeError;
use crate::field::{FieldNumber, FieldValue};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A decoded instance of some message type.
///
/// Absent fields are simply missing from the map. An empty `List` is a
/// populated repeated field and is distinct from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Populated fields indexed by number.
    fields: BTreeMap<FieldNumber, FieldValue>,
    /// Vendor extension payloads, stored exactly as received.
    extensions: BTreeMap<FieldNumber, Bytes>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field and returns the object, for building fixtures.
    ///
    /// # Arguments
    /// * `number` - The field number
    /// * `value` - The value to store
    #[must_use]
    pub fn with(mut self, number: impl Into<FieldNumber>, value: impl Into<FieldValue>) -> Self {
        self.set(number, value);
        self
    }

    /// Gets a field value by number.
    #[must_use]
    pub fn get(&self, number: impl Into<FieldNumber>) -> Option<&FieldValue> {
        self.fields.get(&number.into())
    }

    /// Gets a mutable field value by number.
    #[must_use]
    pub fn get_mut(&mut self, number: impl Into<FieldNumber>) -> Option<&mut FieldValue> {
        self.fields.get_mut(&number.into())
    }

    /// Returns true if the field is populated.
    #[must_use]
    pub fn contains(&self, number: impl Into<FieldNumber>) -> bool {
        self.fields.contains_key(&number.into())
    }

    /// Sets a field, returning the previous value if any.
    pub fn set(
        &mut self,
        number: impl Into<FieldNumber>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(number.into(), value.into())
    }

    /// Sets a oneof member, clearing every sibling of its group first.
    ///
    /// # Arguments
    /// * `number` - The member being populated
    /// * `value` - The value to store
    /// * `siblings` - All member numbers of the group (may include `number`)
    pub fn set_exclusive(
        &mut self,
        number: impl Into<FieldNumber>,
        value: impl Into<FieldValue>,
        siblings: &[FieldNumber],
    ) -> Option<FieldValue> {
        let number = number.into();
        for sibling in siblings.iter().filter(|s| **s != number) {
            self.fields.remove(sibling);
        }
        self.fields.insert(number, value.into())
    }

    /// Removes a field, returning its value if it was populated.
    pub fn remove(&mut self, number: impl Into<FieldNumber>) -> Option<FieldValue> {
        self.fields.remove(&number.into())
    }

    /// Returns the number of populated fields plus stored extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len() + self.extensions.len()
    }

    /// Returns the number of populated fields, extensions excluded.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the number of stored extension payloads.
    #[must_use]
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    /// Returns true if no field and no extension is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.extensions.is_empty()
    }

    /// Iterates over populated fields in number order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldNumber, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    /// Gets an extension payload by number.
    #[must_use]
    pub fn extension(&self, number: impl Into<FieldNumber>) -> Option<&Bytes> {
        self.extensions.get(&number.into())
    }

    /// Stores an extension payload, returning the previous one if any.
    ///
    /// # Errors
    /// Returns `DecodeError::ExtensionOutOfRange` if `number` is outside the
    /// vendor extension range.
    pub fn set_extension(
        &mut self,
        number: impl Into<FieldNumber>,
        payload: impl Into<Bytes>,
    ) -> Result<Option<Bytes>, DecodeError> {
        let number = number.into();
        if !number.is_extension() {
            return Err(DecodeError::ExtensionOutOfRange {
                number: number.value(),
            });
        }
        Ok(self.extensions.insert(number, payload.into()))
    }

    /// Iterates over extension payloads in number order.
    pub fn extensions(&self) -> impl Iterator<Item = (FieldNumber, &Bytes)> {
        self.extensions.iter().map(|(n, b)| (*n, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_set_get() {
        let mut obj = Object::new();
        assert!(obj.is_empty());

        assert!(obj.set(1u32, "tag-1").is_none());
        assert_eq!(obj.get(1u32).and_then(FieldValue::as_str), Some("tag-1"));
        assert!(obj.contains(1u32));
        assert!(!obj.contains(2u32));

        let previous = obj.set(1u32, "tag-2");
        assert_eq!(previous, Some(FieldValue::from("tag-1")));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_object_empty_list_is_populated() {
        let obj = Object::new().with(6u32, FieldValue::List(vec![]));
        assert!(obj.contains(6u32));
        assert!(!obj.is_empty());
    }

    #[test]
    fn test_set_exclusive_clears_siblings() {
        let group = [FieldNumber::new(9), FieldNumber::new(10), FieldNumber::new(11)];
        let mut obj = Object::new().with(9u32, "<div/>").with(10u32, "https://x");

        obj.set_exclusive(11u32, Object::new(), &group);

        assert!(!obj.contains(9u32));
        assert!(!obj.contains(10u32));
        assert!(obj.contains(11u32));
    }

    #[test]
    fn test_len_counts_extensions() {
        let mut obj = Object::new();
        obj.set_extension(500u32, &b"{}"[..]).unwrap();
        assert!(!obj.is_empty());
        assert_eq!(obj.len(), 1);
        assert_eq!(obj.field_count(), 0);
        assert_eq!(obj.extension_count(), 1);

        obj.set(1u32, "tag-1");
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.field_count(), 1);
    }

    #[test]
    fn test_extension_range_enforced() {
        let mut obj = Object::new();
        assert!(obj.set_extension(500u32, &b"{}"[..]).is_ok());
        assert_eq!(obj.extension(500u32).map(|b| b.len()), Some(2));

        let err = obj.set_extension(42u32, &b"{}"[..]).unwrap_err();
        assert_eq!(err, DecodeError::ExtensionOutOfRange { number: 42 });
    }

    #[test]
    fn test_object_serde() {
        let obj = Object::new()
            .with(1u32, "abc")
            .with(14u32, FieldValue::Enum(1));
        let json = serde_json::to_string(&obj).unwrap();
        let back: Object = serde_json::from_str(&json).unwrap();
        assert_eq!(obj, back);
    }
}
