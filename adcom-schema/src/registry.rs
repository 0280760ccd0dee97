/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Enum registry.
//!
//! Maps enum names to their declared codes. Code 0 is never declared and is
//! always reported as unknown; callers treat it as absent.

use crate::schema::EnumDef;
use adcom_core::error::ConfigError;
use serde::Serialize;
use std::collections::HashMap;

/// Registry of enumerated lists, read-only once the schema is built.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnumRegistry {
    enums: HashMap<String, EnumDef>,
}

impl EnumRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enum, returning the definition it replaced.
    pub(crate) fn insert(&mut self, def: EnumDef) -> Option<EnumDef> {
        self.enums.insert(def.name.clone(), def)
    }

    /// Gets an enum definition.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEnum` if `name` is not registered.
    pub fn get(&self, name: &str) -> Result<&EnumDef, ConfigError> {
        self.enums
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnum(name.to_string()))
    }

    /// Returns true if the enum is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Returns true iff `code` is a declared code of the enum.
    ///
    /// Code 0 is never declared, so this is false for it.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEnum` if `name` is not registered.
    pub fn is_valid_code(&self, name: &str, code: i32) -> Result<bool, ConfigError> {
        self.get(name).map(|def| def.contains(code))
    }

    /// Returns true iff `code` is 0 or not declared.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEnum` if `name` is not registered.
    pub fn is_unknown(&self, name: &str, code: i32) -> Result<bool, ConfigError> {
        self.get(name).map(|def| code == 0 || !def.contains(code))
    }

    /// Returns the symbol declared for `code`.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEnum` if `name` is not registered.
    pub fn symbol_of(&self, name: &str, code: i32) -> Result<Option<&str>, ConfigError> {
        self.get(name).map(|def| def.symbol_of(code))
    }

    /// Returns the code declared for `symbol`.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownEnum` if `name` is not registered.
    pub fn code_of(&self, name: &str, symbol: &str) -> Result<Option<i32>, ConfigError> {
        self.get(name).map(|def| def.code_of(symbol))
    }

    /// Returns all enum names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.enums.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered enums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Returns true if no enum is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> EnumRegistry {
        let mut registry = EnumRegistry::new();
        registry.insert(EnumDef::from_pairs(
            "SizeUnit",
            [("DIPS", 1), ("INCHES", 2), ("CENTIMETERS", 3)],
        ));
        registry
    }

    #[test]
    fn test_is_valid_code() {
        let registry = registry();
        assert!(registry.is_valid_code("SizeUnit", 1).unwrap());
        assert!(!registry.is_valid_code("SizeUnit", 0).unwrap());
        assert!(!registry.is_valid_code("SizeUnit", 42).unwrap());
    }

    #[test]
    fn test_is_unknown() {
        let registry = registry();
        assert!(registry.is_unknown("SizeUnit", 0).unwrap());
        assert!(registry.is_unknown("SizeUnit", 42).unwrap());
        assert!(!registry.is_unknown("SizeUnit", 3).unwrap());
    }

    #[test]
    fn test_unregistered_enum_is_config_error() {
        let registry = registry();
        assert_eq!(
            registry.is_valid_code("Bogus", 1),
            Err(ConfigError::UnknownEnum("Bogus".to_string()))
        );
        assert!(registry.is_unknown("Bogus", 0).is_err());
    }

    #[test]
    fn test_symbol_lookups() {
        let registry = registry();
        assert_eq!(registry.symbol_of("SizeUnit", 2).unwrap(), Some("INCHES"));
        assert_eq!(registry.code_of("SizeUnit", "DIPS").unwrap(), Some(1));
        assert_eq!(registry.names(), vec!["SizeUnit"]);
    }
}
