//! Placement Validation Example
//!
//! Validates a seller's placement and prints it with declared defaults
//! filled. Set `ADCOM_INPUT` to process a document of your own.

use adcom_schema::adcom::names;
use serde_json::json;
use tracing::info;

mod common;
use common::{ExampleConfig, init_logging, run};

fn main() -> anyhow::Result<()> {
    init_logging();
    let cfg = ExampleConfig::from_env();

    let doc = cfg.document(json!({
        "tagid": "homepage-top",
        "secure": 1,
        "display": {
            "pos": 1,
            "w": 728,
            "h": 90,
            "mime": ["image/png", "image/jpeg"],
            "event": [{"type": 1, "method": [1]}]
        },
        "video": {
            "ptype": 1,
            "mime": ["video/mp4"],
            "mindur": 5,
            "maxdur": 30,
            "comp": [{"id": "c1", "display": {"w": 300, "h": 250}}]
        },
        "ext": {"501": {"floor_hint": 0.42}}
    }))?;

    let outcome = run(&cfg, names::PLACEMENT, &doc)?;
    info!(
        "Placement {}: {} issues",
        if outcome.is_valid() { "accepted" } else { "rejected" },
        outcome.report.len()
    );

    info!("Processing a placement with no subtype");
    let bare = run(&cfg, names::PLACEMENT, &json!({"tagid": "orphan"}))?;
    info!("Bare placement valid: {}", bare.is_valid());
    Ok(())
}
