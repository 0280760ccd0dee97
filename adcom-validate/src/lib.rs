/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # AdCOM Validate
//!
//! Schema-driven validation and normalization of decoded AdCOM objects.
//!
//! This crate provides:
//! - **Validator**: Depth-first walk reporting type, cardinality, enum,
//!   oneof, required-attribute, and cross-field issues
//! - **Normalizer**: In-place, idempotent assignment of declared defaults
//! - **Rules**: The [`Rule`] trait for named cross-field constraints
//! - **Processor**: Validator and normalizer composed behind a builder
//!
//! Malformed data never raises an error here. Problems are returned as
//! [`ValidationIssue`]s and the caller decides; only schema misuse fails
//! with a `ConfigError`.

pub mod config;
pub mod issue;
pub mod normalizer;
pub mod pipeline;
pub mod rules;
pub mod validator;

pub use config::{NormalizerConfig, ValidatorConfig};
pub use issue::{IssueCode, Severity, ValidationIssue, ValidationReport};
pub use normalizer::Normalizer;
pub use pipeline::{ProcessOutcome, Processor, ProcessorBuilder};
pub use rules::{PlacementSubtypeRule, Rule, default_rules};
pub use validator::Validator;
