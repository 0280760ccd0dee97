/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Schema builder.
//!
//! Collects message and enum definitions and checks them once, at startup.
//! A schema that builds is safe to walk: every reference resolves, every
//! default fits its field, and the message graph has no cycles.

use crate::registry::EnumRegistry;
use crate::schema::{EnumDef, FieldType, MessageDef, Schema};
use adcom_core::error::ConfigError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// DFS state for cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Builder for a validated [`Schema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    /// Schema version label.
    version: String,
    /// Message definitions in insertion order.
    messages: Vec<MessageDef>,
    /// Enum definitions in insertion order.
    enums: Vec<EnumDef>,
}

impl SchemaBuilder {
    /// Creates a new builder.
    ///
    /// # Arguments
    /// * `version` - Version label reported by the built schema
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.push(message);
    }

    /// Adds an enum definition.
    pub fn add_enum(&mut self, def: EnumDef) {
        self.enums.push(def);
    }

    /// Adds a message definition.
    #[must_use]
    pub fn message(mut self, message: MessageDef) -> Self {
        self.add_message(message);
        self
    }

    /// Adds an enum definition.
    #[must_use]
    pub fn enumeration(mut self, def: EnumDef) -> Self {
        self.add_enum(def);
        self
    }

    /// Adds several message definitions.
    #[must_use]
    pub fn messages(mut self, messages: impl IntoIterator<Item = MessageDef>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Adds several enum definitions.
    #[must_use]
    pub fn enums(mut self, enums: impl IntoIterator<Item = EnumDef>) -> Self {
        self.enums.extend(enums);
        self
    }

    /// Checks every definition and builds the schema.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found. See the crate documentation for
    /// the full list of checks.
    pub fn build(self) -> Result<Schema, ConfigError> {
        let mut registry = EnumRegistry::new();
        for def in self.enums {
            check_enum(&def)?;
            let name = def.name.clone();
            if registry.insert(def).is_some() {
                return Err(ConfigError::DuplicateEnum(name));
            }
        }

        let mut messages: HashMap<String, MessageDef> = HashMap::new();
        for mut def in self.messages {
            check_fields(&def)?;
            assign_oneofs(&mut def)?;
            if messages.contains_key(&def.name) {
                return Err(ConfigError::DuplicateMessage(def.name));
            }
            messages.insert(def.name.clone(), def);
        }

        link_nested(&mut messages)?;

        for def in messages.values() {
            check_references(def, &messages, &registry)?;
            check_defaults(def, &registry)?;
        }
        check_acyclic(&messages)?;

        debug!(
            version = %self.version,
            messages = messages.len(),
            enums = registry.len(),
            "schema built"
        );

        Ok(Schema {
            version: self.version,
            messages,
            enums: registry,
        })
    }
}

fn check_enum(def: &EnumDef) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnum {
        name: def.name.clone(),
        reason,
    };

    if def.values.is_empty() {
        return Err(invalid("declares no values".to_string()));
    }

    let mut codes = HashSet::new();
    let mut symbols = HashSet::new();
    for value in &def.values {
        if value.code == 0 {
            return Err(invalid(format!(
                "{} uses code 0, which is reserved for unknown",
                value.symbol
            )));
        }
        if !codes.insert(value.code) {
            return Err(invalid(format!("duplicate code {}", value.code)));
        }
        if !symbols.insert(value.symbol.as_str()) {
            return Err(invalid(format!("duplicate symbol {}", value.symbol)));
        }
    }
    Ok(())
}

fn check_fields(def: &MessageDef) -> Result<(), ConfigError> {
    let mut numbers = HashSet::new();
    let mut names = HashSet::new();

    for field in &def.fields {
        let number = field.field_number();
        if number.is_extension() {
            return Err(ConfigError::ReservedFieldNumber {
                message: def.name.clone(),
                field: field.name.clone(),
                number: field.number,
            });
        }
        if !number.is_declarable() {
            return Err(ConfigError::InvalidFieldNumber {
                message: def.name.clone(),
                field: field.name.clone(),
                number: field.number,
            });
        }
        if !numbers.insert(field.number) {
            return Err(ConfigError::DuplicateFieldNumber {
                message: def.name.clone(),
                number: field.number,
            });
        }
        if !names.insert(field.name.as_str()) {
            return Err(ConfigError::DuplicateFieldName {
                message: def.name.clone(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}

/// Records group membership on each member field.
fn assign_oneofs(def: &mut MessageDef) -> Result<(), ConfigError> {
    let mut groups = HashSet::new();
    // member name -> owning group
    let mut members: HashMap<&str, &str> = HashMap::new();

    for group in &def.oneofs {
        let invalid = |reason: String| ConfigError::InvalidOneof {
            message: def.name.clone(),
            group: group.name.clone(),
            reason,
        };

        if !groups.insert(group.name.clone()) {
            return Err(invalid("duplicate group name".to_string()));
        }
        if group.fields.is_empty() {
            return Err(invalid("group has no members".to_string()));
        }
        for member in &group.fields {
            let field = def
                .fields
                .iter()
                .find(|f| &f.name == member)
                .ok_or_else(|| invalid(format!("unknown member {}", member)))?;
            if field.is_repeated() {
                return Err(invalid(format!("member {} is repeated", member)));
            }
            if let Some(preset) = &field.oneof
                && preset != &group.name
            {
                return Err(invalid(format!(
                    "member {} declares group {}",
                    member, preset
                )));
            }
            if let Some(other) = members.insert(member.as_str(), group.name.as_str()) {
                return Err(invalid(format!(
                    "member {} already belongs to group {}",
                    member, other
                )));
            }
        }
    }

    for group in &def.oneofs {
        for field in def.fields.iter_mut().filter(|f| group.contains(&f.name)) {
            field.oneof = Some(group.name.clone());
        }
    }

    if let Some(field) = def
        .fields
        .iter()
        .find(|f| f.oneof.as_ref().is_some_and(|g| !groups.contains(g)))
    {
        return Err(ConfigError::InvalidOneof {
            message: def.name.clone(),
            group: field.oneof.clone().unwrap_or_default(),
            reason: format!("field {} names an undeclared group", field.name),
        });
    }
    Ok(())
}

fn link_nested(messages: &mut HashMap<String, MessageDef>) -> Result<(), ConfigError> {
    let nested: Vec<(String, String)> = messages
        .values()
        .filter_map(|m| m.parent().map(|p| (p.to_string(), m.name.clone())))
        .collect();

    for (parent, child) in nested {
        let Some(def) = messages.get_mut(&parent) else {
            return Err(ConfigError::OrphanNestedType {
                message: child,
                parent,
            });
        };
        if !def.nested.contains(&child) {
            def.nested.push(child);
        }
    }

    for def in messages.values_mut() {
        def.nested.sort_unstable();
    }
    Ok(())
}

fn check_references(
    def: &MessageDef,
    messages: &HashMap<String, MessageDef>,
    registry: &EnumRegistry,
) -> Result<(), ConfigError> {
    for field in &def.fields {
        let resolved = match &field.field_type {
            FieldType::Scalar(_) => true,
            FieldType::Message(name) => messages.contains_key(name),
            FieldType::Enum(name) => registry.contains(name),
        };
        if !resolved {
            return Err(ConfigError::UnresolvedType {
                message: def.name.clone(),
                field: field.name.clone(),
                type_name: field
                    .field_type
                    .referenced_type()
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn check_defaults(def: &MessageDef, registry: &EnumRegistry) -> Result<(), ConfigError> {
    for field in &def.fields {
        let Some(default) = field.default_value() else {
            continue;
        };
        let invalid = |reason: String| ConfigError::InvalidDefault {
            message: def.name.clone(),
            field: field.name.clone(),
            reason,
        };

        if field.is_repeated() {
            return Err(invalid("repeated fields cannot declare defaults".to_string()));
        }
        if field.field_type.is_message() {
            return Err(invalid("message fields cannot declare defaults".to_string()));
        }
        if !field.field_type.accepts_shape(default) {
            return Err(invalid(format!(
                "expected {}, found {}",
                field.field_type,
                default.kind()
            )));
        }
        if let (FieldType::Enum(name), Some(code)) = (&field.field_type, default.as_enum())
            && !registry.is_valid_code(name, code)?
        {
            return Err(invalid(format!("code {} is not declared in {}", code, name)));
        }
    }
    Ok(())
}

fn check_acyclic(messages: &HashMap<String, MessageDef>) -> Result<(), ConfigError> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut names: Vec<&str> = messages.keys().map(String::as_str).collect();
    names.sort_unstable();

    for name in names {
        let mut stack = Vec::new();
        visit(name, messages, &mut marks, &mut stack)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    messages: &'a HashMap<String, MessageDef>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Result<(), ConfigError> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle = stack[start..].to_vec();
            cycle.push(name);
            return Err(ConfigError::CyclicReference {
                path: cycle.join(" -> "),
            });
        }
        None => {}
    }

    marks.insert(name, Mark::Visiting);
    stack.push(name);
    if let Some(def) = messages.get(name) {
        for field in &def.fields {
            if let FieldType::Message(target) = &field.field_type {
                visit(target.as_str(), messages, marks, stack)?;
            }
        }
    }
    stack.pop();
    marks.insert(name, Mark::Done);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use adcom_core::field::{FieldValue, MAX_FIELD_NUMBER};
    use adcom_core::object::Object;

    fn size_unit() -> EnumDef {
        EnumDef::from_pairs("SizeUnit", [("DIPS", 1), ("INCHES", 2)])
    }

    #[test]
    fn test_build_minimal_schema() {
        let schema = SchemaBuilder::new("test")
            .enumeration(size_unit())
            .message(
                MessageDef::new("Box")
                    .field(FieldDef::int32(1, "w"))
                    .field(FieldDef::enumeration(2, "unit", "SizeUnit").with_default(FieldValue::Enum(1)))
                    .field(FieldDef::message(3, "inner", "Box.Inner")),
            )
            .message(MessageDef::new("Box.Inner").field(FieldDef::string(1, "label")))
            .build()
            .unwrap();

        assert_eq!(schema.version(), "test");
        assert_eq!(schema.message_names(), vec!["Box", "Box.Inner"]);
        assert_eq!(schema.nested_of("Box").unwrap(), ["Box.Inner".to_string()]);
        assert_eq!(
            schema.default_of("Box", "unit").unwrap(),
            Some(&FieldValue::Enum(1))
        );
    }

    #[test]
    fn test_oneof_membership_assigned() {
        let schema = SchemaBuilder::new("test")
            .message(
                MessageDef::new("Video")
                    .field(FieldDef::string(1, "adm"))
                    .field(FieldDef::string(2, "curl"))
                    .oneof("markup", &["adm", "curl"]),
            )
            .build()
            .unwrap();

        let fields = schema.fields_of("Video").unwrap();
        assert!(fields.iter().all(|f| f.oneof.as_deref() == Some("markup")));
        assert_eq!(schema.oneof_groups_of("Video").unwrap().len(), 1);
    }

    #[test]
    fn test_reserved_extension_number_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("Ad").field(FieldDef::string(150, "vendor")))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReservedFieldNumber { number: 150, .. }));
    }

    #[test]
    fn test_duplicate_field_number_rejected() {
        let err = SchemaBuilder::new("test")
            .message(
                MessageDef::new("Ad")
                    .field(FieldDef::string(1, "id"))
                    .field(FieldDef::string(1, "lang")),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateFieldNumber {
                message: "Ad".to_string(),
                number: 1
            }
        );
    }

    #[test]
    fn test_unresolved_reference_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("Ad").field(FieldDef::message(1, "audit", "Audit")))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnresolvedType { ref type_name, .. } if type_name == "Audit"));
    }

    #[test]
    fn test_enum_code_zero_rejected() {
        let err = SchemaBuilder::new("test")
            .enumeration(EnumDef::from_pairs("SizeUnit", [("UNKNOWN", 0)]))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnum { .. }));
    }

    #[test]
    fn test_invalid_defaults_rejected() {
        let wrong_shape = SchemaBuilder::new("test")
            .message(MessageDef::new("Video").field(FieldDef::boolean(1, "boxing").with_default(1i64)))
            .build()
            .unwrap_err();
        assert!(matches!(wrong_shape, ConfigError::InvalidDefault { .. }));

        let undeclared_code = SchemaBuilder::new("test")
            .enumeration(size_unit())
            .message(
                MessageDef::new("Video")
                    .field(FieldDef::enumeration(1, "unit", "SizeUnit").with_default(FieldValue::Enum(7))),
            )
            .build()
            .unwrap_err();
        assert!(matches!(undeclared_code, ConfigError::InvalidDefault { .. }));
    }

    #[test]
    fn test_repeated_oneof_member_rejected() {
        let err = SchemaBuilder::new("test")
            .message(
                MessageDef::new("Display")
                    .field(FieldDef::string(1, "adm"))
                    .field(FieldDef::string(2, "curl").repeated())
                    .oneof("markup", &["adm", "curl"]),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOneof { .. }));
    }

    #[test]
    fn test_orphan_nested_type_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("Missing.Child"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::OrphanNestedType { .. }));
    }

    #[test]
    fn test_cycle_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("A").field(FieldDef::message(1, "b", "B")))
            .message(MessageDef::new("B").field(FieldDef::message(1, "a", "A")))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::CyclicReference {
                path: "A -> B -> A".to_string()
            }
        );
    }

    #[test]
    fn test_field_in_two_groups_rejected() {
        let err = SchemaBuilder::new("test")
            .enumeration(size_unit())
            .message(
                MessageDef::new("Choice")
                    .field(FieldDef::string(1, "a"))
                    .field(FieldDef::enumeration(2, "b", "SizeUnit").with_default(FieldValue::Enum(1)))
                    .field(FieldDef::string(3, "c"))
                    .oneof("g1", &["a", "b"])
                    .oneof("g2", &["b", "c"]),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidOneof {
                message: "Choice".to_string(),
                group: "g2".to_string(),
                reason: "member b already belongs to group g1".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_message_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("Ad").field(FieldDef::string(1, "id")))
            .message(MessageDef::new("Ad").field(FieldDef::string(1, "id")))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateMessage("Ad".to_string()));
    }

    #[test]
    fn test_duplicate_enum_rejected() {
        let err = SchemaBuilder::new("test")
            .enumeration(size_unit())
            .enumeration(size_unit())
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateEnum("SizeUnit".to_string()));
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let err = SchemaBuilder::new("test")
            .message(
                MessageDef::new("Ad")
                    .field(FieldDef::string(1, "id"))
                    .field(FieldDef::string(2, "id")),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateFieldName {
                message: "Ad".to_string(),
                field: "id".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_field_numbers_rejected() {
        for number in [0, MAX_FIELD_NUMBER + 1] {
            let err = SchemaBuilder::new("test")
                .message(MessageDef::new("Ad").field(FieldDef::string(number, "id")))
                .build()
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidFieldNumber {
                    message: "Ad".to_string(),
                    field: "id".to_string(),
                    number,
                }
            );
        }
    }

    #[test]
    fn test_default_on_message_field_rejected() {
        let err = SchemaBuilder::new("test")
            .message(MessageDef::new("Inner").field(FieldDef::string(1, "label")))
            .message(
                MessageDef::new("Outer")
                    .field(FieldDef::message(1, "inner", "Inner").with_default(Object::new())),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDefault { ref field, ref reason, .. }
                if field == "inner" && reason.contains("message")
        ));
    }

    #[test]
    fn test_default_on_repeated_field_rejected() {
        let err = SchemaBuilder::new("test")
            .message(
                MessageDef::new("Format")
                    .field(FieldDef::int32(1, "w").repeated().with_default(1i64)),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDefault { ref field, ref reason, .. }
                if field == "w" && reason.contains("repeated")
        ));
    }

    #[test]
    fn test_duplicate_enum_code_rejected() {
        let err = SchemaBuilder::new("test")
            .enumeration(EnumDef::from_pairs("SizeUnit", [("DIPS", 1), ("PIXELS", 1)]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnum {
                name: "SizeUnit".to_string(),
                reason: "duplicate code 1".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_enum_symbol_rejected() {
        let err = SchemaBuilder::new("test")
            .enumeration(EnumDef::from_pairs("SizeUnit", [("DIPS", 1), ("DIPS", 2)]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnum {
                name: "SizeUnit".to_string(),
                reason: "duplicate symbol DIPS".to_string()
            }
        );
    }
}
