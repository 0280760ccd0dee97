/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Media objects: the `Ad` and its display, video and audio subtypes.

use super::enums::{
    API_FRAMEWORK, AUDIT_STATUS, CATEGORY_TAXONOMY, CREATIVE_ATTRIBUTE,
    CREATIVE_SUBTYPE_AUDIO_VIDEO, CREATIVE_SUBTYPE_DISPLAY, EVENT_TRACKING_METHOD, EVENT_TYPE,
    MEDIA_RATING, NATIVE_DATA_ASSET_TYPE, NATIVE_IMAGE_ASSET_TYPE,
};
use super::names;
use crate::schema::{FieldDef, MessageDef};

pub(crate) fn messages() -> Vec<MessageDef> {
    vec![
        ad(),
        display(),
        banner(),
        link_asset(),
        native(),
        asset(),
        title_asset(),
        image_asset(),
        video_asset(),
        audio_asset(),
        data_asset(),
        event(),
        video(),
        audio(),
        audit(),
    ]
}

fn ad() -> MessageDef {
    MessageDef::new(names::AD)
        .with_description("Root of a creative: one of display, video or audio")
        .field(FieldDef::string(1, "id").required())
        .field(FieldDef::string(2, "adomain").repeated())
        .field(FieldDef::string(3, "bundle").repeated())
        .field(FieldDef::string(4, "iurl"))
        .field(FieldDef::string(5, "cat").repeated())
        .field(FieldDef::enumeration(6, "cattax", CATEGORY_TAXONOMY))
        .field(FieldDef::string(7, "lang"))
        .field(FieldDef::enumeration(8, "attr", CREATIVE_ATTRIBUTE).repeated())
        .field(FieldDef::boolean(9, "secure"))
        .field(FieldDef::enumeration(10, "mrating", MEDIA_RATING))
        .field(FieldDef::int64(11, "init"))
        .field(FieldDef::int64(12, "lastmod"))
        .field(FieldDef::message(13, "display", names::DISPLAY))
        .field(FieldDef::message(14, "video", names::VIDEO))
        .field(FieldDef::message(15, "audio", names::AUDIO))
        .field(FieldDef::message(16, "audit", names::AUDIT))
        .oneof("subtype", &["display", "video", "audio"])
}

fn display() -> MessageDef {
    MessageDef::new(names::DISPLAY)
        .field(FieldDef::string(1, "mime"))
        .field(FieldDef::enumeration(2, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(3, "ctype", CREATIVE_SUBTYPE_DISPLAY))
        .field(FieldDef::int32(4, "w"))
        .field(FieldDef::int32(5, "h"))
        .field(FieldDef::int32(6, "wratio"))
        .field(FieldDef::int32(7, "hratio"))
        .field(FieldDef::string(8, "priv"))
        .field(FieldDef::string(9, "adm"))
        .field(FieldDef::string(10, "curl"))
        .field(FieldDef::message(11, "banner", names::BANNER))
        .field(FieldDef::message(12, "native", names::NATIVE))
        .field(FieldDef::message(13, "event", names::EVENT).repeated())
        .oneof("markup", &["adm", "banner", "native", "curl"])
}

fn banner() -> MessageDef {
    MessageDef::new(names::BANNER)
        .field(FieldDef::string(1, "img").required())
        .field(FieldDef::message(2, "link", names::LINK_ASSET))
}

fn link_asset() -> MessageDef {
    MessageDef::new(names::LINK_ASSET)
        .field(FieldDef::string(1, "url").required())
        .field(FieldDef::string(2, "urlfb"))
        .field(FieldDef::string(3, "trkr").repeated())
}

fn native() -> MessageDef {
    MessageDef::new(names::NATIVE)
        .field(FieldDef::message(1, "link", names::LINK_ASSET))
        .field(FieldDef::message(2, "asset", names::ASSET).repeated())
}

fn asset() -> MessageDef {
    MessageDef::new(names::ASSET)
        .field(FieldDef::int32(1, "id"))
        .field(FieldDef::boolean(2, "req"))
        .field(FieldDef::message(3, "title", names::TITLE_ASSET))
        .field(FieldDef::message(4, "image", names::IMAGE_ASSET))
        .field(FieldDef::message(5, "video", names::VIDEO_ASSET))
        .field(FieldDef::message(6, "audio", names::AUDIO_ASSET))
        .field(FieldDef::message(7, "data", names::DATA_ASSET))
        .field(FieldDef::message(8, "link", names::LINK_ASSET))
        .oneof("kind", &["title", "image", "video", "audio", "data"])
}

fn title_asset() -> MessageDef {
    MessageDef::new(names::TITLE_ASSET).field(FieldDef::string(1, "text").required())
}

fn image_asset() -> MessageDef {
    MessageDef::new(names::IMAGE_ASSET)
        .field(FieldDef::string(1, "url").required())
        .field(FieldDef::int32(2, "w"))
        .field(FieldDef::int32(3, "h"))
        .field(FieldDef::enumeration(4, "type", NATIVE_IMAGE_ASSET_TYPE))
}

fn video_asset() -> MessageDef {
    MessageDef::new(names::VIDEO_ASSET)
        .field(FieldDef::string(1, "adm"))
        .field(FieldDef::string(2, "curl"))
        .oneof("markup", &["adm", "curl"])
}

fn audio_asset() -> MessageDef {
    MessageDef::new(names::AUDIO_ASSET)
        .field(FieldDef::string(1, "adm"))
        .field(FieldDef::string(2, "curl"))
        .oneof("markup", &["adm", "curl"])
}

fn data_asset() -> MessageDef {
    MessageDef::new(names::DATA_ASSET)
        .field(FieldDef::string(1, "value").required())
        .field(FieldDef::int32(2, "len"))
        .field(FieldDef::enumeration(3, "type", NATIVE_DATA_ASSET_TYPE))
}

fn event() -> MessageDef {
    MessageDef::new(names::EVENT)
        .field(FieldDef::enumeration(1, "type", EVENT_TYPE).required())
        .field(FieldDef::enumeration(2, "method", EVENT_TRACKING_METHOD).required())
        .field(FieldDef::enumeration(3, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::string(4, "url"))
        .field(FieldDef::string(5, "cdata").repeated())
}

fn video() -> MessageDef {
    MessageDef::new(names::VIDEO)
        .field(FieldDef::string(1, "mime").repeated())
        .field(FieldDef::enumeration(2, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(3, "ctype", CREATIVE_SUBTYPE_AUDIO_VIDEO))
        .field(FieldDef::int32(4, "dur"))
        .field(FieldDef::string(5, "adm"))
        .field(FieldDef::string(6, "curl"))
        .oneof("markup", &["adm", "curl"])
}

fn audio() -> MessageDef {
    MessageDef::new(names::AUDIO)
        .field(FieldDef::string(1, "mime").repeated())
        .field(FieldDef::enumeration(2, "api", API_FRAMEWORK).repeated())
        .field(FieldDef::enumeration(3, "ctype", CREATIVE_SUBTYPE_AUDIO_VIDEO))
        .field(FieldDef::int32(4, "dur"))
        .field(FieldDef::string(5, "adm"))
        .field(FieldDef::string(6, "curl"))
        .oneof("markup", &["adm", "curl"])
}

fn audit() -> MessageDef {
    MessageDef::new(names::AUDIT)
        .field(FieldDef::enumeration(1, "status", AUDIT_STATUS))
        .field(FieldDef::string(2, "feedback").repeated())
        .field(FieldDef::int64(3, "init"))
        .field(FieldDef::int64(4, "lastmod"))
}
