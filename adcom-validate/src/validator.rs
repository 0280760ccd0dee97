/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema-driven validator.
//!
//! Walks an object graph depth first, following the schema descriptor, and
//! collects every issue it finds. The walk terminates because built schemas
//! are acyclic.

use crate::config::ValidatorConfig;
use crate::issue::{IssueCode, Severity, ValidationIssue, ValidationReport};
use crate::rules::{Rule, default_rules};
use adcom_core::error::ConfigError;
use adcom_core::field::FieldValue;
use adcom_core::object::Object;
use adcom_core::types::FieldPath;
use adcom_schema::schema::{FieldDef, FieldType, MessageDef, Schema};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates objects against a schema.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Arc<Schema>,
    config: ValidatorConfig,
    rules: Vec<Arc<dyn Rule>>,
}

impl Validator {
    /// Creates a validator with the default configuration and built-in rules.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            config: ValidatorConfig::default(),
            rules: default_rules(),
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a cross-field rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replaces every rule, built-in ones included.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Arc<dyn Rule>>) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the schema.
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns the registered rules.
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Validates an object as an instance of `message_type`.
    ///
    /// # Arguments
    /// * `object` - The root object
    /// * `message_type` - Full name of its message type
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMessage` if `message_type` is not
    /// registered. Malformed data is reported in the returned report.
    pub fn validate(
        &self,
        object: &Object,
        message_type: &str,
    ) -> Result<ValidationReport, ConfigError> {
        let message = self.schema.message(message_type)?;
        let mut report = ValidationReport::new(message_type);
        let mut path = FieldPath::root();
        self.walk(object, message, &mut path, &mut report)?;
        debug!(
            message_type,
            errors = report.errors().count(),
            warnings = report.warnings().count(),
            "validation complete"
        );
        Ok(report)
    }

    fn walk(
        &self,
        object: &Object,
        message: &MessageDef,
        path: &mut FieldPath,
        report: &mut ValidationReport,
    ) -> Result<(), ConfigError> {
        if self.config.report_unknown_fields {
            for (number, _) in object.fields() {
                if !number.is_extension() && message.get_field(number).is_none() {
                    self.record(
                        report,
                        ValidationIssue::new(
                            IssueCode::UnknownField,
                            path.child(number.to_string()),
                            format!("field number {} is not declared by {}", number, message.name),
                        ),
                    );
                }
            }
        }

        for field in &message.fields {
            let Some(value) = object.get(field.number) else {
                if field.required && self.config.check_required {
                    self.record(
                        report,
                        ValidationIssue::new(
                            IssueCode::MissingRequired,
                            path.child(&field.name),
                            format!("required attribute of {} is absent", message.name),
                        ),
                    );
                }
                continue;
            };
            path.push_field(&field.name);
            self.check_field(field, value, path, report)?;
            path.pop();
        }

        for group in &message.oneofs {
            let populated: Vec<&str> = group
                .fields
                .iter()
                .filter_map(|name| message.get_field_by_name(name))
                .filter(|field| object.contains(field.number))
                .map(|field| field.name.as_str())
                .collect();
            if populated.len() > 1 {
                self.record(
                    report,
                    ValidationIssue::new(
                        IssueCode::OneofConflict,
                        &*path,
                        format!(
                            "oneof group '{}' has {} members set: {}",
                            group.name,
                            populated.len(),
                            populated.join(", ")
                        ),
                    ),
                );
            }
        }

        if self.config.cross_field_rules {
            for rule in self.rules.iter().filter(|r| r.message_type() == message.name) {
                for issue in rule.check(object, message, path) {
                    debug!(rule = rule.name(), path = %issue.path, "rule violated");
                    self.record(report, issue);
                }
            }
        }
        Ok(())
    }

    fn check_field(
        &self,
        field: &FieldDef,
        value: &FieldValue,
        path: &mut FieldPath,
        report: &mut ValidationReport,
    ) -> Result<(), ConfigError> {
        match (field.is_repeated(), value) {
            (true, FieldValue::List(items)) => {
                for (index, item) in items.iter().enumerate() {
                    path.push_index(index);
                    self.check_value(field, item, path, report)?;
                    path.pop();
                }
            }
            (true, other) => self.record(
                report,
                ValidationIssue::new(
                    IssueCode::CardinalityMismatch,
                    &*path,
                    format!("repeated field holds a single {}", other.kind()),
                ),
            ),
            (false, FieldValue::List(_)) => self.record(
                report,
                ValidationIssue::new(
                    IssueCode::CardinalityMismatch,
                    &*path,
                    "singular field holds a list",
                ),
            ),
            (false, other) => self.check_value(field, other, path, report)?,
        }
        Ok(())
    }

    fn check_value(
        &self,
        field: &FieldDef,
        value: &FieldValue,
        path: &mut FieldPath,
        report: &mut ValidationReport,
    ) -> Result<(), ConfigError> {
        match (&field.field_type, value) {
            (FieldType::Enum(_), FieldValue::Enum(0)) => {}
            (FieldType::Enum(name), FieldValue::Enum(code)) => {
                if !self.schema.enums().is_valid_code(name, *code)? {
                    self.record(
                        report,
                        ValidationIssue::new(
                            IssueCode::UnknownEnumCode,
                            &*path,
                            format!("code {} is not declared by {}", code, name),
                        )
                        .with_severity(self.config.unknown_enum_severity),
                    );
                }
            }
            (FieldType::Message(name), FieldValue::Message(nested)) => {
                let def = self.schema.message(name)?;
                self.walk(nested, def, path, report)?;
            }
            (field_type, value) if !field_type.accepts_shape(value) => self.record(
                report,
                ValidationIssue::new(
                    IssueCode::TypeMismatch,
                    &*path,
                    format!("expected {}, found {} {}", field_type, value.kind(), value),
                ),
            ),
            _ => {}
        }
        Ok(())
    }

    fn record(&self, report: &mut ValidationReport, issue: ValidationIssue) {
        if issue.severity == Severity::Warning {
            warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
        }
        report.push(issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcom_core::types::SizeUnit;
    use adcom_schema::adcom::{self, names};

    fn validator() -> Validator {
        Validator::new(Arc::new(adcom::build().unwrap()))
    }

    fn number(v: &Validator, message: &str, field: &str) -> u32 {
        v.schema()
            .field_by_name(message, field)
            .unwrap()
            .unwrap()
            .number
    }

    fn display_placement(v: &Validator) -> Object {
        let display = Object::new().with(
            number(v, names::DISPLAY_PLACEMENT, "unit"),
            FieldValue::Enum(SizeUnit::Dips.code()),
        );
        Object::new().with(number(v, names::PLACEMENT, "display"), display)
    }

    #[test]
    fn test_valid_placement() {
        let v = validator();
        let report = v.validate(&display_placement(&v), names::PLACEMENT).unwrap();
        assert!(report.is_empty(), "{report}");
    }

    #[test]
    fn test_unknown_message_type_is_config_error() {
        let v = validator();
        assert_eq!(
            v.validate(&Object::new(), "Bogus"),
            Err(ConfigError::UnknownMessage("Bogus".to_string()))
        );
    }

    #[test]
    fn test_missing_placement_subtype() {
        let v = validator();
        let object = Object::new().with(number(&v, names::PLACEMENT, "tagid"), "slot-1");
        let report = v.validate(&object, names::PLACEMENT).unwrap();
        assert_eq!(report.find(IssueCode::MissingPlacementSubtype).count(), 1);
        assert!(report.has_errors());

        let report = v
            .clone()
            .with_config(ValidatorConfig::new().with_cross_field_rules(false))
            .validate(&object, names::PLACEMENT)
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_enum_zero_is_absent_equivalent() {
        let v = validator();
        let mut object = display_placement(&v);
        let display = object
            .get_mut(number(&v, names::PLACEMENT, "display"))
            .and_then(FieldValue::as_message_mut)
            .unwrap();
        display.set(number(&v, names::DISPLAY_PLACEMENT, "unit"), FieldValue::Enum(0));
        display.set(number(&v, names::DISPLAY_PLACEMENT, "pos"), FieldValue::Enum(0));

        let report = v.validate(&object, names::PLACEMENT).unwrap();
        assert!(report.is_empty(), "{report}");
    }

    #[test]
    fn test_unknown_enum_code_is_warning() {
        let v = validator();
        let mut object = display_placement(&v);
        let display = object
            .get_mut(number(&v, names::PLACEMENT, "display"))
            .and_then(FieldValue::as_message_mut)
            .unwrap();
        display.set(number(&v, names::DISPLAY_PLACEMENT, "pos"), FieldValue::Enum(99));

        let report = v.validate(&object, names::PLACEMENT).unwrap();
        let issue = report.find(IssueCode::UnknownEnumCode).next().unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.path, "display.pos");
        assert!(report.is_valid());

        let strict = v
            .clone()
            .with_config(ValidatorConfig::new().with_unknown_enum_severity(Severity::Error));
        assert!(strict.validate(&object, names::PLACEMENT).unwrap().has_errors());
    }

    #[test]
    fn test_oneof_conflict_reported_once() {
        let v = validator();
        let adm = number(&v, names::DISPLAY, "adm");
        let curl = number(&v, names::DISPLAY, "curl");
        let banner = number(&v, names::DISPLAY, "banner");
        let banner_obj = Object::new().with(number(&v, names::BANNER, "img"), "https://x/i.png");

        let single = Object::new().with(adm, "<div/>");
        let report = v.validate(&single, names::DISPLAY).unwrap();
        assert_eq!(report.find(IssueCode::OneofConflict).count(), 0);

        let triple = Object::new()
            .with(adm, "<div/>")
            .with(curl, "https://x/c")
            .with(banner, banner_obj);
        let report = v.validate(&triple, names::DISPLAY).unwrap();
        let conflicts: Vec<_> = report.find(IssueCode::OneofConflict).collect();
        assert_eq!(conflicts.len(), 1);
        assert!(conflicts[0].message.contains("'markup'"));
        assert!(conflicts[0].message.contains("adm"));
        assert!(conflicts[0].message.contains("banner"));
    }

    #[test]
    fn test_type_and_cardinality_mismatch() {
        let v = validator();
        let tagid = number(&v, names::PLACEMENT, "tagid");
        let wlang = number(&v, names::PLACEMENT, "wlang");
        let mut object = display_placement(&v);
        object.set(tagid, 42i64);
        object.set(wlang, "en");

        let report = v.validate(&object, names::PLACEMENT).unwrap();
        let mismatch = report.find(IssueCode::TypeMismatch).next().unwrap();
        assert_eq!(mismatch.path, "tagid");
        let cardinality = report.find(IssueCode::CardinalityMismatch).next().unwrap();
        assert_eq!(cardinality.path, "wlang");
    }

    #[test]
    fn test_int32_range_checked() {
        let v = validator();
        let w = number(&v, names::DISPLAY_PLACEMENT, "w");
        let object = Object::new().with(w, i64::from(i32::MAX) + 1);
        let report = v.validate(&object, names::DISPLAY_PLACEMENT).unwrap();
        assert_eq!(report.find(IssueCode::TypeMismatch).count(), 1);
    }

    #[test]
    fn test_repeated_elements_and_paths() {
        let v = validator();
        let event = number(&v, names::DISPLAY_PLACEMENT, "event");
        let kind = number(&v, names::EVENT_SPEC, "type");
        let wjs = number(&v, names::EVENT_SPEC, "wjs");
        let events = vec![
            FieldValue::from(Object::new().with(kind, FieldValue::Enum(1))),
            FieldValue::from(Object::new().with(kind, FieldValue::Enum(2)).with(wjs, "yes")),
        ];
        let display = Object::new().with(event, events);
        let object =
            Object::new().with(number(&v, names::PLACEMENT, "display"), display);

        let report = v.validate(&object, names::PLACEMENT).unwrap();
        let mismatch = report.find(IssueCode::TypeMismatch).next().unwrap();
        assert_eq!(mismatch.path, "display.event[1].wjs");
    }

    #[test]
    fn test_empty_list_is_valid() {
        let v = validator();
        let event = number(&v, names::DISPLAY_PLACEMENT, "event");
        let object = Object::new().with(event, Vec::<FieldValue>::new());
        let report = v.validate(&object, names::DISPLAY_PLACEMENT).unwrap();
        assert!(report.is_empty(), "{report}");
    }

    #[test]
    fn test_missing_required() {
        let v = validator();
        let report = v.validate(&Object::new(), names::AD).unwrap();
        let missing = report.find(IssueCode::MissingRequired).next().unwrap();
        assert_eq!(missing.path, "id");

        let lenient = v.clone().with_config(ValidatorConfig::new().with_check_required(false));
        assert!(lenient.validate(&Object::new(), names::AD).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_and_extension_fields() {
        let v = validator();
        let mut object = display_placement(&v);
        object.set(77u32, "forward-compatible");
        object.set(500u32, "vendor");
        object.set_extension(600u32, &b"{}"[..]).unwrap();

        let report = v.validate(&object, names::PLACEMENT).unwrap();
        let unknown: Vec<_> = report.find(IssueCode::UnknownField).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].path, "77");
        assert!(report.is_valid());

        let quiet = v
            .clone()
            .with_config(ValidatorConfig::new().with_report_unknown_fields(false));
        assert!(quiet.validate(&object, names::PLACEMENT).unwrap().is_empty());
    }

    #[derive(Debug)]
    struct NoEmptyTagId;

    impl Rule for NoEmptyTagId {
        fn name(&self) -> &str {
            "no-empty-tagid"
        }

        fn message_type(&self) -> &str {
            names::PLACEMENT
        }

        fn check(
            &self,
            object: &Object,
            message: &MessageDef,
            path: &FieldPath,
        ) -> Vec<ValidationIssue> {
            let empty = message
                .get_field_by_name("tagid")
                .and_then(|f| object.get(f.number))
                .and_then(FieldValue::as_str)
                .is_some_and(str::is_empty);
            if empty {
                vec![ValidationIssue::new(
                    IssueCode::MissingRequired,
                    path.child("tagid"),
                    "tagid is empty",
                )]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn test_custom_rule() {
        let v = validator().with_rule(Arc::new(NoEmptyTagId));
        let mut object = display_placement(&v);
        object.set(number(&v, names::PLACEMENT, "tagid"), "");
        let report = v.validate(&object, names::PLACEMENT).unwrap();
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.issues()[0].path, "tagid");
    }
}
