/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Placement objects: what a seller allows in an impression opportunity.
//!
//! A `Placement` may offer several subtypes at once, so display, video and
//! audio are not a oneof here; the "at least one" constraint is a
//! cross-field rule in the validator.

use super::enums::{
    API_FRAMEWORK, CLICK_TYPE, COMPANION_TYPE, CREATIVE_SUBTYPE_AUDIO_VIDEO,
    CREATIVE_SUBTYPE_DISPLAY, DELIVERY_METHOD, DISPLAY_CONTEXT_TYPE, DISPLAY_PLACEMENT_TYPE,
    EVENT_TRACKING_METHOD, EVENT_TYPE, EXPANDABLE_DIRECTION, FEED_TYPE, LINEARITY_MODE,
    NATIVE_DATA_ASSET_TYPE, NATIVE_IMAGE_ASSET_TYPE, PLACEMENT_POSITION, PLAYBACK_CESSATION_MODE,
    PLAYBACK_METHOD, SIZE_UNIT, VIDEO_PLACEMENT_SUBTYPE, VOLUME_NORMALIZATION_MODE,
};
use super::names;
use crate::schema::{FieldDef, MessageDef};
use adcom_core::field::FieldValue;
use adcom_core::types::SizeUnit;

pub(crate) fn messages() -> Vec<MessageDef> {
    vec![
        placement(),
        display_placement(),
        event_spec(),
        display_format(),
        native_format(),
        asset_format(),
        title_asset_format(),
        image_asset_format(),
        data_asset_format(),
        video_placement(),
        audio_placement(),
        companion(),
    ]
}

fn dips() -> FieldValue {
    FieldValue::Enum(SizeUnit::Dips.code())
}

fn placement() -> MessageDef {
    MessageDef::new(names::PLACEMENT)
        .with_description("Impression opportunity offering display, video or audio")
        .field(FieldDef::string(1, "tagid"))
        .field(FieldDef::int32(2, "ssai"))
        .field(FieldDef::string(3, "sdk"))
        .field(FieldDef::string(4, "sdkver"))
        .field(FieldDef::boolean(5, "reward"))
        .field(FieldDef::string(6, "wlang").repeated())
        .field(FieldDef::string(7, "wlangb").repeated())
        .field(FieldDef::boolean(8, "secure"))
        .field(FieldDef::boolean(9, "admx"))
        .field(FieldDef::boolean(10, "curlx"))
        .field(FieldDef::message(11, "display", names::DISPLAY_PLACEMENT))
        .field(FieldDef::message(12, "video", names::VIDEO_PLACEMENT))
        .field(FieldDef::message(13, "audio", names::AUDIO_PLACEMENT))
}

fn display_placement() -> MessageDef {
    MessageDef::new(names::DISPLAY_PLACEMENT)
        .field(FieldDef::enumeration(1, "pos", PLACEMENT_POSITION))
        .field(FieldDef::boolean(2, "instl"))
        .field(FieldDef::boolean(3, "topframe"))
        .field(FieldDef::string(4, "ifrbust").repeated())
        .field(FieldDef::enumeration(5, "clktype", CLICK_TYPE))
        .field(FieldDef::boolean(6, "ampren"))
        .field(FieldDef::enumeration(7, "ptype", DISPLAY_PLACEMENT_TYPE))
        .field(FieldDef::enumeration(8, "context", DISPLAY_CONTEXT_TYPE))
        .field(FieldDef::string(9, "mime").repeated())
        .field(FieldDef::enumeration(10, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(11, "ctype", CREATIVE_SUBTYPE_DISPLAY).repeated())
        .field(FieldDef::int32(12, "w"))
        .field(FieldDef::int32(13, "h"))
        .field(FieldDef::enumeration(14, "unit", SIZE_UNIT).with_default(dips()))
        .field(FieldDef::boolean(15, "priv"))
        .field(FieldDef::message(16, "displayfmt", names::DISPLAY_FORMAT).repeated())
        .field(FieldDef::message(17, "nativefmt", names::NATIVE_FORMAT))
        .field(FieldDef::message(18, "event", names::EVENT_SPEC).repeated())
}

/// Tracking permitted for one event type. `wjs` and `wpx` read as
/// allowlists, so both default to true.
fn event_spec() -> MessageDef {
    MessageDef::new(names::EVENT_SPEC)
        .field(FieldDef::enumeration(1, "type", EVENT_TYPE).required())
        .field(FieldDef::enumeration(2, "method", EVENT_TRACKING_METHOD).repeated())
        .field(FieldDef::enumeration(3, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::string(4, "jstrk").repeated())
        .field(FieldDef::boolean(5, "wjs").with_default(true))
        .field(FieldDef::string(6, "pxtrk").repeated())
        .field(FieldDef::boolean(7, "wpx").with_default(true))
}

fn display_format() -> MessageDef {
    MessageDef::new(names::DISPLAY_FORMAT)
        .field(FieldDef::string(1, "mime").repeated())
        .field(FieldDef::enumeration(2, "ctype", CREATIVE_SUBTYPE_DISPLAY).repeated())
        .field(FieldDef::int32(3, "w"))
        .field(FieldDef::int32(4, "h"))
        .field(FieldDef::int32(5, "wratio"))
        .field(FieldDef::int32(6, "hratio"))
        .field(FieldDef::enumeration(7, "expdir", EXPANDABLE_DIRECTION).repeated())
}

fn native_format() -> MessageDef {
    MessageDef::new(names::NATIVE_FORMAT)
        .field(FieldDef::message(1, "asset", names::ASSET_FORMAT).repeated())
}

fn asset_format() -> MessageDef {
    MessageDef::new(names::ASSET_FORMAT)
        .field(FieldDef::int32(1, "id"))
        .field(FieldDef::boolean(2, "req"))
        .field(FieldDef::message(3, "title", names::TITLE_ASSET_FORMAT))
        .field(FieldDef::message(4, "img", names::IMAGE_ASSET_FORMAT))
        .field(FieldDef::message(5, "data", names::DATA_ASSET_FORMAT))
        .oneof("kind", &["title", "img", "data"])
}

fn title_asset_format() -> MessageDef {
    MessageDef::new(names::TITLE_ASSET_FORMAT).field(FieldDef::int32(1, "len").required())
}

fn image_asset_format() -> MessageDef {
    MessageDef::new(names::IMAGE_ASSET_FORMAT)
        .field(FieldDef::enumeration(1, "type", NATIVE_IMAGE_ASSET_TYPE))
        .field(FieldDef::string(2, "mime").repeated())
        .field(FieldDef::int32(3, "w"))
        .field(FieldDef::int32(4, "h"))
        .field(FieldDef::int32(5, "wmin"))
        .field(FieldDef::int32(6, "hmin"))
        .field(FieldDef::int32(7, "wratio"))
        .field(FieldDef::int32(8, "hratio"))
}

fn data_asset_format() -> MessageDef {
    MessageDef::new(names::DATA_ASSET_FORMAT)
        .field(FieldDef::enumeration(1, "type", NATIVE_DATA_ASSET_TYPE).required())
        .field(FieldDef::int32(2, "len"))
}

// `delay` carries negative sentinels (-1 generic mid-roll, -2 post-roll)
// so it stays an int32 rather than an enum.
fn video_placement() -> MessageDef {
    MessageDef::new(names::VIDEO_PLACEMENT)
        .field(FieldDef::enumeration(1, "ptype", VIDEO_PLACEMENT_SUBTYPE))
        .field(FieldDef::enumeration(2, "pos", PLACEMENT_POSITION))
        .field(FieldDef::int32(3, "delay"))
        .field(FieldDef::boolean(4, "skip"))
        .field(FieldDef::int32(5, "skipmin"))
        .field(FieldDef::int32(6, "skipafter"))
        .field(FieldDef::enumeration(7, "playmethod", PLAYBACK_METHOD))
        .field(FieldDef::enumeration(8, "playend", PLAYBACK_CESSATION_MODE))
        .field(FieldDef::enumeration(9, "clktype", CLICK_TYPE))
        .field(FieldDef::string(10, "mime").repeated())
        .field(FieldDef::enumeration(11, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(12, "ctype", CREATIVE_SUBTYPE_AUDIO_VIDEO).repeated())
        .field(FieldDef::int32(13, "w"))
        .field(FieldDef::int32(14, "h"))
        .field(FieldDef::enumeration(15, "unit", SIZE_UNIT).with_default(dips()))
        .field(FieldDef::int32(16, "mindur"))
        .field(FieldDef::int32(17, "maxdur"))
        .field(FieldDef::int32(18, "maxext"))
        .field(FieldDef::int32(19, "minbitr"))
        .field(FieldDef::int32(20, "maxbitr"))
        .field(FieldDef::enumeration(21, "delivery", DELIVERY_METHOD).repeated())
        .field(FieldDef::int32(22, "maxseq"))
        .field(FieldDef::enumeration(23, "linear", LINEARITY_MODE))
        .field(FieldDef::boolean(24, "boxing").with_default(true))
        .field(FieldDef::message(25, "comp", names::COMPANION).repeated())
        .field(FieldDef::enumeration(26, "comptype", COMPANION_TYPE).repeated())
}

fn audio_placement() -> MessageDef {
    MessageDef::new(names::AUDIO_PLACEMENT)
        .field(FieldDef::int32(1, "delay"))
        .field(FieldDef::boolean(2, "skip"))
        .field(FieldDef::int32(3, "skipmin"))
        .field(FieldDef::int32(4, "skipafter"))
        .field(FieldDef::enumeration(5, "playmethod", PLAYBACK_METHOD))
        .field(FieldDef::enumeration(6, "playend", PLAYBACK_CESSATION_MODE))
        .field(FieldDef::enumeration(7, "feed", FEED_TYPE))
        .field(FieldDef::enumeration(8, "nvol", VOLUME_NORMALIZATION_MODE))
        .field(FieldDef::string(9, "mime").repeated())
        .field(FieldDef::enumeration(10, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(11, "ctype", CREATIVE_SUBTYPE_AUDIO_VIDEO).repeated())
        .field(FieldDef::int32(12, "mindur"))
        .field(FieldDef::int32(13, "maxdur"))
        .field(FieldDef::int32(14, "maxext"))
        .field(FieldDef::int32(15, "minbitr"))
        .field(FieldDef::int32(16, "maxbitr"))
        .field(FieldDef::enumeration(17, "delivery", DELIVERY_METHOD).repeated())
        .field(FieldDef::int32(18, "maxseq"))
        .field(FieldDef::message(19, "comp", names::COMPANION).repeated())
        .field(FieldDef::enumeration(20, "comptype", COMPANION_TYPE).repeated())
}

fn companion() -> MessageDef {
    MessageDef::new(names::COMPANION)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::boolean(2, "vcm"))
        .field(FieldDef::message(3, "display", names::DISPLAY_PLACEMENT))
}
