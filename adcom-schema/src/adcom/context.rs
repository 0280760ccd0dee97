/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Context objects: distribution channel, content, user, device and
//! regulatory information.

use super::enums::{
    CATEGORY_TAXONOMY, CONNECTION_TYPE, CONTENT_CONTEXT, CREATIVE_ATTRIBUTE, DEVICE_TYPE,
    ID_MATCH_METHOD, LOCATION_SERVICE, LOCATION_TYPE, MEDIA_RATING, OPERATING_SYSTEM,
    PRODUCTION_QUALITY, USER_AGENT_SOURCE,
};
use super::names;
use crate::schema::{FieldDef, MessageDef};

pub(crate) fn messages() -> Vec<MessageDef> {
    vec![
        site(),
        app(),
        dooh(),
        publisher(),
        content(),
        producer(),
        entity(names::NETWORK),
        entity(names::CHANNEL),
        data(),
        segment(),
        user(),
        device(),
        geo(),
        user_agent(),
        brand_version(),
        regs(),
        restrictions(),
        extended_identifier(),
        uid(),
    ]
}

/// Fields shared by the id/name/domain entity objects.
fn entity(name: &str) -> MessageDef {
    MessageDef::new(name)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::string(3, "domain"))
}

fn producer() -> MessageDef {
    entity(names::PRODUCER)
        .field(FieldDef::string(4, "cat").repeated())
        .field(FieldDef::enumeration(5, "cattax", CATEGORY_TAXONOMY))
}

fn site() -> MessageDef {
    MessageDef::new(names::SITE)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::message(3, "pub", names::PUBLISHER))
        .field(FieldDef::message(4, "content", names::CONTENT))
        .field(FieldDef::string(5, "cat").repeated())
        .field(FieldDef::enumeration(6, "cattax", CATEGORY_TAXONOMY))
        .field(FieldDef::string(7, "sectcat").repeated())
        .field(FieldDef::string(8, "pagecat").repeated())
        .field(FieldDef::boolean(9, "privpolicy"))
        .field(FieldDef::string(10, "kwarray").repeated())
        .field(FieldDef::string(11, "domain"))
        .field(FieldDef::string(12, "page"))
        .field(FieldDef::string(13, "ref"))
        .field(FieldDef::string(14, "search"))
        .field(FieldDef::boolean(15, "mobile"))
        .field(FieldDef::boolean(16, "amp"))
        .field(FieldDef::string(17, "keywords"))
}

fn app() -> MessageDef {
    MessageDef::new(names::APP)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::message(3, "pub", names::PUBLISHER))
        .field(FieldDef::message(4, "content", names::CONTENT))
        .field(FieldDef::string(5, "cat").repeated())
        .field(FieldDef::enumeration(6, "cattax", CATEGORY_TAXONOMY))
        .field(FieldDef::string(7, "sectcat").repeated())
        .field(FieldDef::string(8, "pagecat").repeated())
        .field(FieldDef::boolean(9, "privpolicy"))
        .field(FieldDef::string(10, "kwarray").repeated())
        .field(FieldDef::string(11, "domain"))
        .field(FieldDef::string(12, "bundle"))
        .field(FieldDef::string(13, "storeid"))
        .field(FieldDef::string(14, "storeurl"))
        .field(FieldDef::string(15, "ver"))
        .field(FieldDef::boolean(16, "paid"))
        .field(FieldDef::string(17, "keywords"))
}

fn dooh() -> MessageDef {
    MessageDef::new(names::DOOH)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::message(3, "pub", names::PUBLISHER))
        .field(FieldDef::message(4, "content", names::CONTENT))
        .field(FieldDef::string(5, "venuetype").repeated())
        .field(FieldDef::int32(6, "venuetax"))
        .field(FieldDef::string(7, "domain"))
        .field(FieldDef::string(8, "keywords"))
}

fn publisher() -> MessageDef {
    MessageDef::new(names::PUBLISHER)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::string(3, "domain"))
        .field(FieldDef::string(4, "cat").repeated())
        .field(FieldDef::enumeration(5, "cattax", CATEGORY_TAXONOMY))
}

// `srcrel` is documented both as a direct/indirect int and as a bool;
// int32 accepts both encodings.
fn content() -> MessageDef {
    MessageDef::new(names::CONTENT)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::int32(2, "episode"))
        .field(FieldDef::string(3, "title"))
        .field(FieldDef::string(4, "series"))
        .field(FieldDef::string(5, "season"))
        .field(FieldDef::string(6, "artist"))
        .field(FieldDef::string(7, "genre"))
        .field(FieldDef::string(8, "album"))
        .field(FieldDef::string(9, "isrc"))
        .field(FieldDef::string(10, "url"))
        .field(FieldDef::string(11, "cat").repeated())
        .field(FieldDef::enumeration(12, "cattax", CATEGORY_TAXONOMY))
        .field(FieldDef::enumeration(13, "prodq", PRODUCTION_QUALITY))
        .field(FieldDef::enumeration(14, "context", CONTENT_CONTEXT))
        .field(FieldDef::string(15, "rating"))
        .field(FieldDef::string(16, "urating"))
        .field(FieldDef::enumeration(17, "mrating", MEDIA_RATING))
        .field(FieldDef::string(18, "keywords"))
        .field(FieldDef::string(19, "kwarray").repeated())
        .field(FieldDef::boolean(20, "live"))
        .field(FieldDef::int32(21, "srcrel"))
        .field(FieldDef::int32(22, "len"))
        .field(FieldDef::string(23, "lang"))
        .field(FieldDef::string(24, "langb"))
        .field(FieldDef::boolean(25, "embed"))
        .field(FieldDef::message(26, "producer", names::PRODUCER))
        .field(FieldDef::message(27, "network", names::NETWORK))
        .field(FieldDef::message(28, "channel", names::CHANNEL))
        .field(FieldDef::message(29, "data", names::DATA).repeated())
        .field(FieldDef::string(30, "genres").repeated())
}

fn data() -> MessageDef {
    MessageDef::new(names::DATA)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::message(3, "segment", names::SEGMENT).repeated())
}

fn segment() -> MessageDef {
    MessageDef::new(names::SEGMENT)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "name"))
        .field(FieldDef::string(3, "value"))
}

fn user() -> MessageDef {
    MessageDef::new(names::USER)
        .field(FieldDef::string(1, "id"))
        .field(FieldDef::string(2, "buyeruid"))
        .field(FieldDef::int32(3, "yob"))
        .field(FieldDef::string(4, "gender"))
        .field(FieldDef::string(5, "keywords"))
        .field(FieldDef::string(6, "kwarray").repeated())
        .field(FieldDef::string(7, "consent"))
        .field(FieldDef::message(8, "geo", names::GEO))
        .field(FieldDef::message(9, "data", names::DATA).repeated())
        .field(FieldDef::message(10, "eids", names::EXTENDED_IDENTIFIER).repeated())
}

fn device() -> MessageDef {
    MessageDef::new(names::DEVICE)
        .field(FieldDef::enumeration(1, "type", DEVICE_TYPE))
        .field(FieldDef::string(2, "ua"))
        .field(FieldDef::message(3, "sua", names::USER_AGENT))
        .field(FieldDef::string(4, "ifa"))
        .field(FieldDef::boolean(5, "dnt"))
        .field(FieldDef::boolean(6, "lmt"))
        .field(FieldDef::string(7, "make"))
        .field(FieldDef::string(8, "model"))
        .field(FieldDef::enumeration(9, "os", OPERATING_SYSTEM))
        .field(FieldDef::string(10, "osv"))
        .field(FieldDef::string(11, "hwv"))
        .field(FieldDef::int32(12, "h"))
        .field(FieldDef::int32(13, "w"))
        .field(FieldDef::int32(14, "ppi"))
        .field(FieldDef::double(15, "pxratio"))
        .field(FieldDef::boolean(16, "js"))
        .field(FieldDef::string(17, "lang"))
        .field(FieldDef::string(18, "langb"))
        .field(FieldDef::string(19, "ip"))
        .field(FieldDef::string(20, "ipv6"))
        .field(FieldDef::string(21, "xff"))
        .field(FieldDef::boolean(22, "iptr"))
        .field(FieldDef::string(23, "carrier"))
        .field(FieldDef::string(24, "mccmnc"))
        .field(FieldDef::string(25, "mccmncsim"))
        .field(FieldDef::enumeration(26, "contype", CONNECTION_TYPE))
        .field(FieldDef::boolean(27, "geofetch"))
        .field(FieldDef::message(28, "geo", names::GEO))
}

fn geo() -> MessageDef {
    MessageDef::new(names::GEO)
        .field(FieldDef::enumeration(1, "type", LOCATION_TYPE))
        .field(FieldDef::double(2, "lat"))
        .field(FieldDef::double(3, "lon"))
        .field(FieldDef::int32(4, "accur"))
        .field(FieldDef::int32(5, "lastfix"))
        .field(FieldDef::enumeration(6, "ipserv", LOCATION_SERVICE))
        .field(FieldDef::string(7, "country"))
        .field(FieldDef::string(8, "region"))
        .field(FieldDef::string(9, "metro"))
        .field(FieldDef::string(10, "city"))
        .field(FieldDef::string(11, "zip"))
        .field(FieldDef::int32(12, "utcoffset"))
}

fn user_agent() -> MessageDef {
    MessageDef::new(names::USER_AGENT)
        .field(FieldDef::message(1, "browsers", names::BRAND_VERSION).repeated())
        .field(FieldDef::message(2, "platform", names::BRAND_VERSION))
        .field(FieldDef::boolean(3, "mobile"))
        .field(FieldDef::string(4, "architecture"))
        .field(FieldDef::string(5, "bitness"))
        .field(FieldDef::string(6, "model"))
        .field(FieldDef::enumeration(7, "source", USER_AGENT_SOURCE))
}

fn brand_version() -> MessageDef {
    MessageDef::new(names::BRAND_VERSION)
        .field(FieldDef::string(1, "brand").required())
        .field(FieldDef::string(2, "version").repeated())
}

fn regs() -> MessageDef {
    MessageDef::new(names::REGS)
        .field(FieldDef::boolean(1, "coppa"))
        .field(FieldDef::boolean(2, "gdpr"))
        .field(FieldDef::string(3, "gpp"))
        .field(FieldDef::int32(4, "gpp_sid").repeated())
}

fn restrictions() -> MessageDef {
    MessageDef::new(names::RESTRICTIONS)
        .field(FieldDef::string(1, "bcat").repeated())
        .field(FieldDef::enumeration(2, "cattax", CATEGORY_TAXONOMY))
        .field(FieldDef::string(3, "badv").repeated())
        .field(FieldDef::string(4, "bapp").repeated())
        .field(FieldDef::enumeration(5, "battr", CREATIVE_ATTRIBUTE).repeated())
}

fn extended_identifier() -> MessageDef {
    MessageDef::new(names::EXTENDED_IDENTIFIER)
        .field(FieldDef::string(1, "source"))
        .field(FieldDef::message(2, "uids", names::UID).repeated())
        .field(FieldDef::string(3, "inserter"))
        .field(FieldDef::string(4, "matcher"))
        .field(FieldDef::enumeration(5, "mm", ID_MATCH_METHOD))
}

fn uid() -> MessageDef {
    MessageDef::new(names::UID)
        .field(FieldDef::string(1, "id").required())
        .field(FieldDef::int32(2, "atype"))
}
