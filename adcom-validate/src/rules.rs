/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Named cross-field rules.
//!
//! A rule sees one object of its message type at a time, after the
//! per-field checks of that object have run.

use crate::issue::{IssueCode, ValidationIssue};
use adcom_core::object::Object;
use adcom_core::types::FieldPath;
use adcom_schema::adcom::names;
use adcom_schema::schema::MessageDef;
use std::fmt;
use std::sync::Arc;

/// Constraint spanning several fields of one message type.
///
/// Implement this trait to add checks the schema cannot express.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Returns the rule name, used in logs.
    fn name(&self) -> &str;

    /// Returns the message type this rule applies to.
    fn message_type(&self) -> &str;

    /// Checks one object.
    ///
    /// # Arguments
    /// * `object` - The object being validated
    /// * `message` - Its message definition
    /// * `path` - Location of the object in the graph
    ///
    /// # Returns
    /// The issues found, empty when the object satisfies the rule.
    fn check(&self, object: &Object, message: &MessageDef, path: &FieldPath)
    -> Vec<ValidationIssue>;
}

/// A `Placement` must offer at least one of display, video or audio.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementSubtypeRule;

impl PlacementSubtypeRule {
    /// Subtype fields of `Placement`.
    pub const SUBTYPES: [&'static str; 3] = ["display", "video", "audio"];
}

impl Rule for PlacementSubtypeRule {
    fn name(&self) -> &str {
        "placement-subtype"
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
        let populated = Self::SUBTYPES
            .iter()
            .filter_map(|name| message.get_field_by_name(name))
            .any(|field| object.contains(field.number));
        if populated {
            return Vec::new();
        }
        vec![ValidationIssue::new(
            IssueCode::MissingPlacementSubtype,
            path,
            "placement offers none of display, video, audio",
        )]
    }
}

/// Returns the built-in rules.
#[must_use]
pub fn default_rules() -> Vec<Arc<dyn Rule>> {
    vec![Arc::new(PlacementSubtypeRule)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcom_schema::adcom;

    fn placement_def() -> MessageDef {
        adcom::build()
            .unwrap()
            .message(names::PLACEMENT)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_placement_without_subtype() {
        let def = placement_def();
        let object = Object::new().with(1u32, "tag-1");
        let issues = PlacementSubtypeRule.check(&object, &def, &FieldPath::root());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::MissingPlacementSubtype);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].path, "(root)");
    }

    #[test]
    fn test_placement_with_one_subtype() {
        let def = placement_def();
        let video = def.get_field_by_name("video").unwrap().number;
        let object = Object::new().with(video, Object::new());
        assert!(
            PlacementSubtypeRule
                .check(&object, &def, &FieldPath::root())
                .is_empty()
        );
    }

    #[test]
    fn test_default_rules() {
        let rules = default_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].message_type(), names::PLACEMENT);
        assert_eq!(rules[0].name(), "placement-subtype");
    }
}
