/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # AdCOM
//!
//! Schema-driven validation and normalization of AdCOM objects.
//!
//! AdCOM (Advertising Common Object Model) describes ads, placements and
//! their context as exchanged between programmatic advertising platforms.
//! This crate checks decoded AdCOM object graphs against the declared
//! schema, fills declared defaults, and resolves enum and oneof validity.
//!
//! ## Features
//!
//! - **Embedded schema**: The AdCOM 1.0 Ad, Placement and Context families,
//!   checked once per process
//! - **Non-fatal validation**: Issues are returned with a severity, never
//!   raised
//! - **Idempotent normalization**: Declared defaults such as `unit = DIPS`
//! - **Forward compatible**: Unknown enum codes and fields are warnings;
//!   vendor extensions pass through untouched
//!
//! ## Quick Start
//!
//! ```rust
//! use adcom::prelude::*;
//! use serde_json::json;
//!
//! let schema = adcom::schema::adcom::schema().unwrap();
//! let doc = json!({"tagid": "slot-1", "display": {"w": 300, "h": 250}});
//!
//! let mut placement = JsonDecoder::new(&schema).decode(names::PLACEMENT, &doc).unwrap();
//! let outcome = Processor::adcom().unwrap().process(&mut placement, names::PLACEMENT).unwrap();
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.defaults_applied, 1);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Value model, objects, and error definitions
//! - [`schema`]: Schema descriptors, enum registry, and the embedded schema
//! - [`validate`]: Validator, normalizer, rules, and the processor
//! - [`json`]: JSON decoding and encoding

pub mod core {
    //! Value model, objects, and error definitions.
    pub use adcom_core::*;
}

pub mod schema {
    //! Schema descriptors, enum registry, and the embedded AdCOM schema.
    pub use adcom_schema::*;
}

pub mod validate {
    //! Validator, normalizer, cross-field rules, and the processor.
    pub use adcom_validate::*;
}

pub mod json {
    //! JSON decoding and encoding.
    pub use adcom_json::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use adcom_core::{
        AdcomError, ConfigError, DecodeError, EncodeError, EventTrackingMethod, FieldNumber,
        FieldPath, FieldValue, Object, Result, SizeUnit,
    };

    // Schema
    pub use adcom_schema::adcom::names;
    pub use adcom_schema::{EnumRegistry, FieldDef, FieldType, MessageDef, Schema, SchemaBuilder};

    // Validation
    pub use adcom_validate::{
        IssueCode, NormalizerConfig, Normalizer, PlacementSubtypeRule, ProcessOutcome, Processor,
        ProcessorBuilder, Rule, Severity, ValidationIssue, ValidationReport, Validator,
        ValidatorConfig,
    };

    // JSON
    pub use adcom_json::{JsonDecoder, JsonEncoder};
}
