/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # AdCOM JSON
//!
//! Schema-aware conversion between AdCOM's JSON encoding and the dynamic
//! object model.
//!
//! This crate provides:
//! - **Decoder**: JSON document to [`Object`](adcom_core::Object), keyed by
//!   declared field names
//! - **Encoder**: [`Object`](adcom_core::Object) back to JSON
//!
//! ## Conventions
//!
//! - Booleans travel as `0`/`1`; `true`/`false` are accepted on input
//! - `null` is the same as an absent key
//! - Vendor data lives under `ext`, keyed by field number (100..=9999), and
//!   is kept as raw JSON bytes

pub mod decoder;
pub mod encoder;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;

/// Document key holding vendor extensions.
pub const EXT_KEY: &str = "ext";
