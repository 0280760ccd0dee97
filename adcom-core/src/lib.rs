/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # AdCOM Core
//!
//! Core types, value model, and error definitions for AdCOM object processing.
//!
//! This crate provides the fundamental building blocks used across all AdCOM crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldNumber` and the dynamic `FieldValue`
//! - **Objects**: `Object`, a decoded AdCOM instance with an opaque extension bag
//! - **Core types**: `FieldPath`, `SizeUnit`, `EventTrackingMethod`
//!
//! ## Dynamic Object Model
//!
//! Objects carry no schema of their own. Field numbers index into a schema
//! descriptor held elsewhere, so one representation serves every message type
//! and vendor extensions survive untouched.

pub mod error;
pub mod field;
pub mod object;
pub mod types;

pub use error::{AdcomError, ConfigError, DecodeError, EncodeError, Result};
pub use field::{EXTENSION_RANGE, FieldNumber, FieldValue, MAX_FIELD_NUMBER, ValueKind};
pub use object::Object;
pub use types::{EventTrackingMethod, FieldPath, PathSegment, SizeUnit};
