/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Embedded AdCOM 1.0 schema.
//!
//! The Ad, Placement and Context message families and their enumerated
//! lists, compiled in and checked once per process. Field numbers follow the
//! attribute order of each object; vendor extensions use 100..=9999.
//!
//! # Example
//!
//! ```
//! use adcom_schema::adcom::{self, names};
//!
//! let schema = adcom::schema().unwrap();
//! let unit = schema.default_of(names::DISPLAY_PLACEMENT, "unit").unwrap();
//! assert!(unit.is_some());
//! ```

mod ad;
mod context;
pub mod enums;
mod placement;

use crate::builder::SchemaBuilder;
use crate::schema::Schema;
use adcom_core::error::ConfigError;
use std::sync::{Arc, LazyLock};
use tracing::info;

/// Version label of the embedded schema.
pub const VERSION: &str = "adcom-1.0";

/// Message type names of the embedded schema.
pub mod names {
    pub const AD: &str = "Ad";
    pub const DISPLAY: &str = "Display";
    pub const BANNER: &str = "Banner";
    pub const LINK_ASSET: &str = "LinkAsset";
    pub const NATIVE: &str = "Native";
    pub const ASSET: &str = "Asset";
    pub const TITLE_ASSET: &str = "TitleAsset";
    pub const IMAGE_ASSET: &str = "ImageAsset";
    pub const VIDEO_ASSET: &str = "VideoAsset";
    pub const AUDIO_ASSET: &str = "AudioAsset";
    pub const DATA_ASSET: &str = "DataAsset";
    pub const EVENT: &str = "Event";
    pub const VIDEO: &str = "Video";
    pub const AUDIO: &str = "Audio";
    pub const AUDIT: &str = "Audit";

    pub const PLACEMENT: &str = "Placement";
    pub const DISPLAY_PLACEMENT: &str = "DisplayPlacement";
    pub const EVENT_SPEC: &str = "DisplayPlacement.EventSpec";
    pub const DISPLAY_FORMAT: &str = "DisplayFormat";
    pub const NATIVE_FORMAT: &str = "NativeFormat";
    pub const ASSET_FORMAT: &str = "AssetFormat";
    pub const TITLE_ASSET_FORMAT: &str = "TitleAssetFormat";
    pub const IMAGE_ASSET_FORMAT: &str = "ImageAssetFormat";
    pub const DATA_ASSET_FORMAT: &str = "DataAssetFormat";
    pub const VIDEO_PLACEMENT: &str = "VideoPlacement";
    pub const AUDIO_PLACEMENT: &str = "AudioPlacement";
    pub const COMPANION: &str = "Companion";

    pub const SITE: &str = "Site";
    pub const APP: &str = "App";
    pub const DOOH: &str = "Dooh";
    pub const PUBLISHER: &str = "Publisher";
    pub const CONTENT: &str = "Content";
    pub const PRODUCER: &str = "Producer";
    pub const NETWORK: &str = "Network";
    pub const CHANNEL: &str = "Channel";
    pub const DATA: &str = "Data";
    pub const SEGMENT: &str = "Segment";
    pub const USER: &str = "User";
    pub const DEVICE: &str = "Device";
    pub const GEO: &str = "Geo";
    pub const USER_AGENT: &str = "UserAgent";
    pub const BRAND_VERSION: &str = "BrandVersion";
    pub const REGS: &str = "Regs";
    pub const RESTRICTIONS: &str = "Restrictions";
    pub const EXTENDED_IDENTIFIER: &str = "ExtendedIdentifier";
    pub const UID: &str = "Uid";
}

static SCHEMA: LazyLock<Result<Arc<Schema>, ConfigError>> = LazyLock::new(|| {
    let schema = build()?;
    info!(
        version = schema.version(),
        messages = schema.messages().count(),
        enums = schema.enums().len(),
        "embedded AdCOM schema loaded"
    );
    Ok(Arc::new(schema))
});

/// Builds a fresh copy of the embedded schema.
///
/// # Errors
/// Returns `ConfigError` if the embedded definitions are inconsistent.
pub fn build() -> Result<Schema, ConfigError> {
    SchemaBuilder::new(VERSION)
        .enums(enums::enums())
        .messages(ad::messages())
        .messages(placement::messages())
        .messages(context::messages())
        .build()
}

/// Returns the shared embedded schema, building it on first use.
///
/// # Errors
/// Returns the `ConfigError` raised by the first build; it is cached, so
/// every call reports the same failure.
pub fn schema() -> Result<Arc<Schema>, ConfigError> {
    LazyLock::force(&SCHEMA).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcom_core::field::FieldValue;
    use adcom_core::types::SizeUnit;

    #[test]
    fn test_embedded_schema_builds() {
        let schema = build().unwrap();
        assert_eq!(schema.version(), VERSION);
        assert!(schema.enums().len() >= 30);
        for name in [names::AD, names::PLACEMENT, names::EVENT_SPEC, names::UID] {
            assert!(schema.contains_message(name), "{name} missing");
        }
    }

    #[test]
    fn test_shared_schema_is_cached() {
        let a = schema().unwrap();
        let b = schema().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_declared_defaults() {
        let schema = build().unwrap();
        let dips = FieldValue::Enum(SizeUnit::Dips.code());
        assert_eq!(
            schema.default_of(names::DISPLAY_PLACEMENT, "unit").unwrap(),
            Some(&dips)
        );
        assert_eq!(
            schema.default_of(names::VIDEO_PLACEMENT, "unit").unwrap(),
            Some(&dips)
        );
        assert_eq!(
            schema.default_of(names::VIDEO_PLACEMENT, "boxing").unwrap(),
            Some(&FieldValue::Bool(true))
        );
        assert_eq!(
            schema.default_of(names::EVENT_SPEC, "wjs").unwrap(),
            Some(&FieldValue::Bool(true))
        );
        assert_eq!(
            schema.default_of(names::EVENT_SPEC, "wpx").unwrap(),
            Some(&FieldValue::Bool(true))
        );
        assert_eq!(schema.default_of(names::PLACEMENT, "tagid").unwrap(), None);
    }

    #[test]
    fn test_oneof_groups() {
        let schema = build().unwrap();
        let subtype = &schema.oneof_groups_of(names::AD).unwrap()[0];
        assert_eq!(subtype.name, "subtype");
        assert_eq!(subtype.fields, ["display", "video", "audio"]);

        let markup = &schema.oneof_groups_of(names::DISPLAY).unwrap()[0];
        assert!(["adm", "banner", "native", "curl"]
            .iter()
            .all(|f| markup.contains(f)));

        assert!(schema.oneof_groups_of(names::PLACEMENT).unwrap().is_empty());
        let adm = schema.field_by_name(names::VIDEO, "adm").unwrap().unwrap();
        assert_eq!(adm.oneof.as_deref(), Some("markup"));
    }

    #[test]
    fn test_nested_event_spec() {
        let schema = build().unwrap();
        assert_eq!(
            schema.nested_of(names::DISPLAY_PLACEMENT).unwrap(),
            [names::EVENT_SPEC.to_string()]
        );
        let event = schema
            .field_by_number(names::DISPLAY_PLACEMENT, 18u32)
            .unwrap()
            .unwrap();
        assert_eq!(event.name, "event");
        assert!(event.is_repeated());
    }

    #[test]
    fn test_required_attributes() {
        let schema = build().unwrap();
        let id = schema.field_by_name(names::AD, "id").unwrap().unwrap();
        assert!(id.required);
        let tagid = schema.field_by_name(names::PLACEMENT, "tagid").unwrap().unwrap();
        assert!(!tagid.required);
    }

    #[test]
    fn test_zero_is_never_a_declared_code() {
        let schema = build().unwrap();
        for name in schema.enum_names() {
            assert!(!schema.enums().is_valid_code(name, 0).unwrap(), "{name}");
        }
    }
}
