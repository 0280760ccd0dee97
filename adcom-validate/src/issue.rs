/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Validation issues and reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation issue.
///
/// Ordered so that `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Tolerated; processing continues.
    Warning,
    /// The instance is invalid.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("WARNING"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// Kind of validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// Value shape or width does not fit the declared type.
    TypeMismatch,
    /// Singular field holds a list, or repeated field holds a single value.
    CardinalityMismatch,
    /// Non-zero enum code not declared by the enum.
    UnknownEnumCode,
    /// Field number not declared by the message type.
    UnknownField,
    /// More than one member of a oneof group is populated.
    OneofConflict,
    /// Required attribute is absent.
    MissingRequired,
    /// Placement offers none of display, video or audio.
    MissingPlacementSubtype,
}

impl IssueCode {
    /// Returns the stable code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::CardinalityMismatch => "CARDINALITY_MISMATCH",
            Self::UnknownEnumCode => "UNKNOWN_ENUM_CODE",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::OneofConflict => "ONEOF_CONFLICT",
            Self::MissingRequired => "MISSING_REQUIRED",
            Self::MissingPlacementSubtype => "MISSING_PLACEMENT_SUBTYPE",
        }
    }

    /// Returns the severity this code is reported with by default.
    #[must_use]
    pub const fn default_severity(&self) -> Severity {
        match self {
            Self::UnknownEnumCode | Self::UnknownField => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found in an object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue severity.
    pub severity: Severity,
    /// Issue kind.
    pub code: IssueCode,
    /// Location, e.g. `display.event[0].wjs` or `(root)`.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue with the code's default severity.
    ///
    /// # Arguments
    /// * `code` - The issue kind
    /// * `path` - Where the issue was found
    /// * `message` - Human-readable description
    #[must_use]
    pub fn new(code: IssueCode, path: impl fmt::Display, message: impl Into<String>) -> Self {
        Self {
            severity: code.default_severity(),
            code,
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Overrides the severity.
    #[must_use]
    pub const fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns true if this is an ERROR.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}: {}",
            self.severity, self.code, self.path, self.message
        )
    }
}

/// Issues found while validating one object graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Message type of the root object.
    message_type: String,
    /// Issues in discovery order.
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report for a root message type.
    #[must_use]
    pub fn new(message_type: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            issues: Vec::new(),
        }
    }

    /// Returns the root message type.
    #[must_use]
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Appends an issue.
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns all issues in discovery order.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns the number of issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any ERROR was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(ValidationIssue::is_error)
    }

    /// Returns true if no ERROR was reported. Warnings are allowed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Iterates over ERROR issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Iterates over WARNING issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Iterates over issues of one kind.
    pub fn find(&self, code: IssueCode) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.code == code)
    }

    /// Consumes the report and returns its issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "{}: no issues", self.message_type);
        }
        write!(f, "{}: {} issue(s)", self.message_type, self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  {}", issue)?;
        }
        Ok(())
    }
}
