/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Validate-then-normalize pipeline.
//!
//! This module provides a builder API for composing a [`Validator`] and a
//! [`Normalizer`] over one shared schema.

use crate::config::{NormalizerConfig, ValidatorConfig};
use crate::issue::ValidationReport;
use crate::normalizer::Normalizer;
use crate::rules::{Rule, default_rules};
use crate::validator::Validator;
use adcom_core::error::ConfigError;
use adcom_core::object::Object;
use adcom_schema::adcom;
use adcom_schema::schema::Schema;
use std::sync::Arc;
use tracing::debug;

/// Result of processing one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Issues found by the validator.
    pub report: ValidationReport,
    /// Whether the normalizer ran.
    pub normalized: bool,
    /// Number of defaults the normalizer assigned.
    pub defaults_applied: usize,
}

impl ProcessOutcome {
    /// Returns true if the object had no ERROR issues.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Builder for a [`Processor`].
#[derive(Debug)]
pub struct ProcessorBuilder {
    /// Shared schema.
    schema: Arc<Schema>,
    /// Validator settings.
    validator_config: ValidatorConfig,
    /// Normalizer settings.
    normalizer_config: NormalizerConfig,
    /// Cross-field rules.
    rules: Vec<Arc<dyn Rule>>,
}

impl ProcessorBuilder {
    /// Creates a builder with default settings and the built-in rules.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            validator_config: ValidatorConfig::default(),
            normalizer_config: NormalizerConfig::default(),
            rules: default_rules(),
        }
    }

    /// Sets the validator configuration.
    #[must_use]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.validator_config = config;
        self
    }

    /// Sets the normalizer configuration.
    #[must_use]
    pub fn with_normalizer_config(mut self, config: NormalizerConfig) -> Self {
        self.normalizer_config = config;
        self
    }

    /// Adds a cross-field rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Drops the built-in rules; rules added later are kept.
    #[must_use]
    pub fn without_default_rules(mut self) -> Self {
        self.rules.clear();
        self
    }

    /// Returns the configured rules.
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Builds the processor.
    #[must_use]
    pub fn build(self) -> Processor {
        Processor {
            validator: Validator::new(Arc::clone(&self.schema))
                .with_config(self.validator_config)
                .with_rules(self.rules),
            normalizer: Normalizer::new(self.schema).with_config(self.normalizer_config),
        }
    }
}

/// Validates objects and normalizes the valid ones.
#[derive(Debug, Clone)]
pub struct Processor {
    validator: Validator,
    normalizer: Normalizer,
}

impl Processor {
    /// Creates a processor over the embedded AdCOM schema with default
    /// settings.
    ///
    /// # Errors
    /// Returns `ConfigError` if the embedded schema fails to build.
    pub fn adcom() -> Result<Self, ConfigError> {
        Ok(ProcessorBuilder::new(adcom::schema()?).build())
    }

    /// Returns the validator.
    #[must_use]
    pub const fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Returns the normalizer.
    #[must_use]
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Validates an object and, if no ERROR was found, normalizes it in
    /// place.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `message_type` is not
    /// registered.
    pub fn process(
        &self,
        object: &mut Object,
        message_type: &str,
    ) -> Result<ProcessOutcome, ConfigError> {
        let report = self.validator.validate(object, message_type)?;
        if report.has_errors() {
            debug!(message_type, "normalization skipped, object has errors");
            return Ok(ProcessOutcome {
                report,
                normalized: false,
                defaults_applied: 0,
            });
        }
        let defaults_applied = self.normalizer.normalize(object, message_type)?;
        Ok(ProcessOutcome {
            report,
            normalized: true,
            defaults_applied,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueCode, ValidationIssue};
    use adcom_core::field::FieldValue;
    use adcom_core::types::FieldPath;
    use adcom_schema::adcom::names;
    use adcom_schema::schema::MessageDef;

    fn field(schema: &Schema, message: &str, name: &str) -> u32 {
        schema.field_by_name(message, name).unwrap().unwrap().number
    }

    #[test]
    fn test_valid_object_is_normalized() {
        let processor = Processor::adcom().unwrap();
        let schema = processor.validator().schema().clone();
        let mut object =
            Object::new().with(field(&schema, names::PLACEMENT, "display"), Object::new());

        let outcome = processor.process(&mut object, names::PLACEMENT).unwrap();
        assert!(outcome.is_valid());
        assert!(outcome.normalized);
        assert_eq!(outcome.defaults_applied, 1);
    }

    #[test]
    fn test_invalid_object_is_untouched() {
        let processor = Processor::adcom().unwrap();
        let schema = processor.validator().schema().clone();
        let mut object = Object::new().with(field(&schema, names::PLACEMENT, "tagid"), "slot");
        let before = object.clone();

        let outcome = processor.process(&mut object, names::PLACEMENT).unwrap();
        assert!(!outcome.is_valid());
        assert!(!outcome.normalized);
        assert_eq!(outcome.defaults_applied, 0);
        assert_eq!(object, before);
    }

    #[derive(Debug)]
    struct RejectAll;

    impl Rule for RejectAll {
        fn name(&self) -> &str {
            "reject-all"
        }

        fn message_type(&self) -> &str {
            names::DISPLAY_PLACEMENT
        }

        fn check(&self, _: &Object, _: &MessageDef, path: &FieldPath) -> Vec<ValidationIssue> {
            vec![ValidationIssue::new(IssueCode::MissingRequired, path, "rejected")]
        }
    }

    #[test]
    fn test_builder_rules() {
        let schema = adcom::schema().unwrap();
        let builder = ProcessorBuilder::new(Arc::clone(&schema))
            .without_default_rules()
            .with_rule(RejectAll);
        assert_eq!(builder.rules().len(), 1);
        let processor = builder.build();

        let mut object = Object::new();
        let outcome = processor.process(&mut object, names::PLACEMENT).unwrap();
        assert!(outcome.normalized);
        assert_eq!(outcome.defaults_applied, 0);

        let display = field(&schema, names::PLACEMENT, "display");
        let mut object = Object::new().with(display, Object::new());
        let outcome = processor.process(&mut object, names::PLACEMENT).unwrap();
        assert_eq!(outcome.report.errors().count(), 1);
        assert_eq!(outcome.report.issues()[0].path, "display");
        assert!(object
            .get(display)
            .and_then(FieldValue::as_message)
            .is_some_and(Object::is_empty));
    }

    #[test]
    fn test_builder_configs() {
        let processor = ProcessorBuilder::new(adcom::schema().unwrap())
            .with_config(ValidatorConfig::new().with_cross_field_rules(false))
            .with_normalizer_config(NormalizerConfig::new().with_canonicalize_zero_enums(false))
            .build();
        assert!(!processor.validator().config().cross_field_rules);
        assert!(!processor.normalizer().config().canonicalize_zero_enums);

        let mut object = Object::new();
        let outcome = processor.process(&mut object, names::PLACEMENT).unwrap();
        assert!(outcome.report.is_empty());
    }
}
