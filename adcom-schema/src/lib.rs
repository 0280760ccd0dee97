/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # AdCOM Schema
//!
//! Schema descriptors and enum registry for AdCOM object processing.
//!
//! This crate provides:
//! - **Schema definitions**: Field, message, oneof, and enum definitions
//! - **Enum registry**: Code membership and unknown-code queries
//! - **Schema builder**: Fail-fast checks run once at startup
//! - **Embedded schema**: The AdCOM 1.0 Ad, Placement, and Context families

pub mod adcom;
pub mod builder;
pub mod registry;
pub mod schema;

pub use builder::SchemaBuilder;
pub use registry::EnumRegistry;
pub use schema::{
    Cardinality, EnumDef, EnumValue, FieldDef, FieldType, MessageDef, OneofDef, ScalarType,
    Schema,
};
