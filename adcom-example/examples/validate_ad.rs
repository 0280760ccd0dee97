//! Ad Validation Example
//!
//! Shows oneof enforcement on a display ad and forward-compatible handling
//! of enum codes this schema version does not know.

use adcom_schema::adcom::names;
use serde_json::json;
use tracing::info;

mod common;
use common::{ExampleConfig, init_logging, run};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();

    let doc = cfg.document(json!({
        "id": "ad-1001",
        "adomain": ["example.com"],
        "display": {
            "w": 300,
            "h": 250,
            "banner": {"img": "https://cdn.example.com/creative.png"},
            "event": [{"type": 1, "method": 1, "url": "https://t.example.com/imp"}]
        }
    }))?;
    let outcome = run(&cfg, names::AD, &doc)?;
    info!("Ad valid: {}", outcome.is_valid());

    info!("Processing an ad carrying two markup options");
    let conflicting = json!({
        "id": "ad-1002",
        "display": {
            "adm": "<div>creative</div>",
            "banner": {"img": "https://cdn.example.com/creative.png"}
        }
    });
    let outcome = run(&cfg, names::AD, &conflicting)?;
    info!("Conflicting ad valid: {}", outcome.is_valid());

    info!("Processing an ad with a future enum code");
    let future = json!({"id": "ad-1003", "display": {"adm": "<div/>"}, "attr": [999]});
    let outcome = run(&cfg, names::AD, &future)?;
    info!(
        "Future ad valid: {} with {} warnings",
        outcome.is_valid(),
        outcome.report.warnings().count()
    );
    Ok(())
}
