//! Common utilities shared across examples.

#![allow(dead_code)]

use adcom_json::{JsonDecoder, JsonEncoder};
use adcom_validate::{ProcessOutcome, Processor};
use serde_json::Value;
use std::env;
use std::fs;
use tracing::{info, warn};

/// Example configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct ExampleConfig {
    /// Path to a JSON document to process instead of the built-in fixture.
    pub input: Option<String>,
    /// Reject unknown keys while decoding.
    pub strict: bool,
}

impl ExampleConfig {
    /// Reads `ADCOM_INPUT` and `ADCOM_STRICT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            input: env::var("ADCOM_INPUT").ok(),
            strict: env::var("ADCOM_STRICT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Loads the configured document, or `fallback` when none is set.
    pub fn document(&self, fallback: Value) -> anyhow::Result<Value> {
        match &self.input {
            Some(path) => {
                info!("Reading {}", path);
                Ok(serde_json::from_slice(&fs::read(path)?)?)
            }
            None => Ok(fallback),
        }
    }
}

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Decodes, processes and re-encodes one document, logging each step.
pub fn run(cfg: &ExampleConfig, message_type: &str, doc: &Value) -> anyhow::Result<ProcessOutcome> {
    let processor = Processor::adcom()?;
    let schema = processor.validator().schema().clone();

    let mut object = JsonDecoder::new(&schema)
        .with_strict(cfg.strict)
        .decode(message_type, doc)?;
    info!(
        "Decoded {} with {} fields and {} extensions",
        message_type,
        object.field_count(),
        object.extension_count()
    );

    let outcome = processor.process(&mut object, message_type)?;
    for issue in outcome.report.issues() {
        if issue.is_error() {
            warn!("{}", issue);
        } else {
            info!("{}", issue);
        }
    }

    if outcome.normalized {
        info!("Applied {} defaults", outcome.defaults_applied);
        let encoded = JsonEncoder::new(&schema).encode(&object, message_type)?;
        info!("Normalized: {}", serde_json::to_string_pretty(&encoded)?);
    } else {
        warn!(
            "{} has {} errors, left as decoded",
            message_type,
            outcome.report.errors().count()
        );
    }
    Ok(outcome)
}
