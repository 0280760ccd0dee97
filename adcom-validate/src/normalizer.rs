/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Default-filling normalizer.
//!
//! Assigns declared defaults to unset fields, in place. Running it twice
//! assigns nothing the second time.

use crate::config::NormalizerConfig;
use adcom_core::error::ConfigError;
use adcom_core::field::FieldValue;
use adcom_core::object::Object;
use adcom_schema::schema::{FieldDef, FieldType, MessageDef, Schema};
use std::sync::Arc;
use tracing::{debug, trace};

/// Applies declared defaults to objects.
#[derive(Debug, Clone)]
pub struct Normalizer {
    schema: Arc<Schema>,
    config: NormalizerConfig,
}

impl Normalizer {
    /// Creates a normalizer with the default configuration.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            config: NormalizerConfig::default(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: NormalizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Fills declared defaults throughout an object graph.
    ///
    /// Values of the wrong shape are left alone; run the validator first.
    ///
    /// # Arguments
    /// * `object` - The root object, modified in place
    /// * `message_type` - Full name of its message type
    ///
    /// # Returns
    /// The number of fields assigned.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `message_type` is not
    /// registered.
    pub fn normalize(&self, object: &mut Object, message_type: &str) -> Result<usize, ConfigError> {
        let message = self.schema.message(message_type)?;
        let applied = self.fill(object, message)?;
        debug!(message_type, applied, "normalization complete");
        Ok(applied)
    }

    fn fill(&self, object: &mut Object, message: &MessageDef) -> Result<usize, ConfigError> {
        let mut applied = 0;
        for field in &message.fields {
            if let Some(default) = field.default_value()
                && self.is_unset(object, field)
                && !sibling_populated(object, message, field)
            {
                trace!(message = %message.name, field = %field.name, %default, "default applied");
                object.set(field.number, default.clone());
                applied += 1;
            }

            let FieldType::Message(name) = &field.field_type else {
                continue;
            };
            let Some(value) = object.get_mut(field.number) else {
                continue;
            };
            let nested_def = self.schema.message(name)?;
            match value {
                FieldValue::Message(nested) => applied += self.fill(nested, nested_def)?,
                FieldValue::List(items) => {
                    for item in items {
                        if let FieldValue::Message(nested) = item {
                            applied += self.fill(nested, nested_def)?;
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(applied)
    }

    /// Absent, or an enum holding code 0 when canonicalization is on.
    fn is_unset(&self, object: &Object, field: &FieldDef) -> bool {
        match object.get(field.number) {
            None => true,
            Some(FieldValue::Enum(0)) => {
                self.config.canonicalize_zero_enums && field.field_type.is_enum()
            }
            Some(_) => false,
        }
    }
}

fn sibling_populated(object: &Object, message: &MessageDef, field: &FieldDef) -> bool {
    let Some(group) = field.oneof.as_deref().and_then(|g| message.get_oneof(g)) else {
        return false;
    };
    group
        .fields
        .iter()
        .filter(|name| **name != field.name)
        .filter_map(|name| message.get_field_by_name(name))
        .any(|sibling| object.contains(sibling.number))
}
