/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Validator and normalizer configuration.
//!
//! Both structs load from configuration files; absent keys keep their
//! defaults.

use crate::issue::Severity;
use serde::{Deserialize, Serialize};

/// Configuration for the [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Report populated field numbers the schema does not declare.
    pub report_unknown_fields: bool,
    /// Report absent required attributes.
    pub check_required: bool,
    /// Severity of non-zero, undeclared enum codes.
    pub unknown_enum_severity: Severity,
    /// Run named cross-field rules.
    pub cross_field_rules: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            report_unknown_fields: true,
            check_required: true,
            unknown_enum_severity: Severity::Warning,
            cross_field_rules: true,
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether undeclared field numbers are reported.
    #[must_use]
    pub const fn with_report_unknown_fields(mut self, enabled: bool) -> Self {
        self.report_unknown_fields = enabled;
        self
    }

    /// Sets whether absent required attributes are reported.
    #[must_use]
    pub const fn with_check_required(mut self, enabled: bool) -> Self {
        self.check_required = enabled;
        self
    }

    /// Sets the severity of undeclared enum codes.
    #[must_use]
    pub const fn with_unknown_enum_severity(mut self, severity: Severity) -> Self {
        self.unknown_enum_severity = severity;
        self
    }

    /// Sets whether cross-field rules run.
    #[must_use]
    pub const fn with_cross_field_rules(mut self, enabled: bool) -> Self {
        self.cross_field_rules = enabled;
        self
    }
}

/// Configuration for the [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Treat enum code 0 as unset on fields that declare a default.
    pub canonicalize_zero_enums: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            canonicalize_zero_enums: true,
        }
    }
}

impl NormalizerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether enum code 0 is replaced by the declared default.
    #[must_use]
    pub const fn with_canonicalize_zero_enums(mut self, enabled: bool) -> Self {
        self.canonicalize_zero_enums = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_config_default() {
        let config = ValidatorConfig::default();
        assert!(config.report_unknown_fields);
        assert!(config.check_required);
        assert_eq!(config.unknown_enum_severity, Severity::Warning);
        assert!(config.cross_field_rules);
    }

    #[test]
    fn test_validator_config_builder() {
        let config = ValidatorConfig::new()
            .with_report_unknown_fields(false)
            .with_unknown_enum_severity(Severity::Error);
        assert!(!config.report_unknown_fields);
        assert_eq!(config.unknown_enum_severity, Severity::Error);
        assert!(config.check_required);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"check_required": false, "unknown_enum_severity": "ERROR"}"#)
                .unwrap();
        assert!(!config.check_required);
        assert_eq!(config.unknown_enum_severity, Severity::Error);
        assert!(config.report_unknown_fields);

        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert!(config.canonicalize_zero_enums);
    }
}
