/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! AdCOM enumerated lists.
//!
//! Lists whose published table starts at 0 with a real meaning (e.g.
//! "Non-Clickable") are declared from 1 upwards, since 0 is the reserved
//! unknown/unset code.

use crate::schema::EnumDef;
use adcom_core::types::{EventTrackingMethod, SizeUnit};

pub const API_FRAMEWORK: &str = "APIFramework";
pub const AUDIT_STATUS: &str = "AuditStatus";
pub const AUTO_REFRESH_TRIGGER: &str = "AutoRefreshTrigger";
pub const CATEGORY_TAXONOMY: &str = "CategoryTaxonomy";
pub const CLICK_TYPE: &str = "ClickType";
pub const COMPANION_TYPE: &str = "CompanionType";
pub const CONNECTION_TYPE: &str = "ConnectionType";
pub const CONTENT_CONTEXT: &str = "ContentContext";
pub const CREATIVE_ATTRIBUTE: &str = "CreativeAttribute";
pub const CREATIVE_SUBTYPE_AUDIO_VIDEO: &str = "CreativeSubtypeAudioVideo";
pub const CREATIVE_SUBTYPE_DISPLAY: &str = "CreativeSubtypeDisplay";
pub const DELIVERY_METHOD: &str = "DeliveryMethod";
pub const DEVICE_TYPE: &str = "DeviceType";
pub const DISPLAY_CONTEXT_TYPE: &str = "DisplayContextType";
pub const DISPLAY_PLACEMENT_TYPE: &str = "DisplayPlacementType";
pub const EVENT_TRACKING_METHOD: &str = "EventTrackingMethod";
pub const EVENT_TYPE: &str = "EventType";
pub const EXPANDABLE_DIRECTION: &str = "ExpandableDirection";
pub const FEED_TYPE: &str = "FeedType";
pub const ID_MATCH_METHOD: &str = "IDMatchMethod";
pub const LINEARITY_MODE: &str = "LinearityMode";
pub const LOCATION_SERVICE: &str = "LocationService";
pub const LOCATION_TYPE: &str = "LocationType";
pub const MEDIA_RATING: &str = "MediaRating";
pub const NATIVE_DATA_ASSET_TYPE: &str = "NativeDataAssetType";
pub const NATIVE_IMAGE_ASSET_TYPE: &str = "NativeImageAssetType";
pub const OPERATING_SYSTEM: &str = "OperatingSystem";
pub const PLACEMENT_POSITION: &str = "PlacementPosition";
pub const PLAYBACK_CESSATION_MODE: &str = "PlaybackCessationMode";
pub const PLAYBACK_METHOD: &str = "PlaybackMethod";
pub const PRODUCTION_QUALITY: &str = "ProductionQuality";
pub const SIZE_UNIT: &str = "SizeUnit";
pub const USER_AGENT_SOURCE: &str = "UserAgentSource";
pub const VIDEO_PLACEMENT_SUBTYPE: &str = "VideoPlacementSubtype";
pub const VOLUME_NORMALIZATION_MODE: &str = "VolumeNormalizationMode";

/// Returns every AdCOM enumerated list.
pub(crate) fn enums() -> Vec<EnumDef> {
    vec![
        EnumDef::from_pairs(
            API_FRAMEWORK,
            [
                ("VPAID_1_0", 1),
                ("VPAID_2_0", 2),
                ("MRAID_1_0", 3),
                ("ORMMA", 4),
                ("MRAID_2_0", 5),
                ("MRAID_3_0", 6),
                ("OMID_1_0", 7),
                ("SIMID_1_0", 8),
            ],
        ),
        EnumDef::from_pairs(
            AUDIT_STATUS,
            [
                ("PENDING_AUDIT", 1),
                ("PRE_APPROVED", 2),
                ("APPROVED", 3),
                ("DENIED", 4),
                ("CHANGED_RESUBMISSION_REQUESTED", 5),
                ("EXPIRED", 6),
            ],
        ),
        EnumDef::from_pairs(
            AUTO_REFRESH_TRIGGER,
            [("USER_ACTION", 1), ("EVENT", 2), ("TIME", 3)],
        ),
        EnumDef::from_pairs(
            CATEGORY_TAXONOMY,
            [
                ("IAB_CONTENT_1_0", 1),
                ("IAB_CONTENT_2_0", 2),
                ("IAB_PRODUCT_1_0", 3),
                ("IAB_AUDIENCE_1_1", 4),
                ("IAB_CONTENT_2_1", 5),
                ("IAB_CONTENT_2_2", 6),
                ("IAB_CONTENT_3_0", 7),
            ],
        ),
        EnumDef::from_pairs(
            CLICK_TYPE,
            [
                ("CLICKABLE_DETAILS_UNKNOWN", 1),
                ("CLICKABLE_EMBEDDED_BROWSER", 2),
                ("CLICKABLE_NATIVE_BROWSER", 3),
            ],
        ),
        EnumDef::from_pairs(COMPANION_TYPE, [("STATIC", 1), ("HTML", 2), ("IFRAME", 3)]),
        EnumDef::from_pairs(
            CONNECTION_TYPE,
            [
                ("ETHERNET", 1),
                ("WIFI", 2),
                ("CELLULAR_UNKNOWN", 3),
                ("CELLULAR_2G", 4),
                ("CELLULAR_3G", 5),
                ("CELLULAR_4G", 6),
                ("CELLULAR_5G", 7),
            ],
        ),
        EnumDef::from_pairs(
            CONTENT_CONTEXT,
            [
                ("VIDEO", 1),
                ("GAME", 2),
                ("MUSIC", 3),
                ("APPLICATION", 4),
                ("TEXT", 5),
                ("OTHER", 6),
                ("UNKNOWN", 7),
            ],
        ),
        EnumDef::from_pairs(
            CREATIVE_ATTRIBUTE,
            [
                ("AUDIO_AUTO_PLAY", 1),
                ("AUDIO_USER_INITIATED", 2),
                ("EXPANDABLE_AUTOMATIC", 3),
                ("EXPANDABLE_CLICK_INITIATED", 4),
                ("EXPANDABLE_ROLLOVER_INITIATED", 5),
                ("VIDEO_IN_BANNER_AUTO_PLAY", 6),
                ("VIDEO_IN_BANNER_USER_INITIATED", 7),
                ("POP", 8),
                ("PROVOCATIVE", 9),
                ("ANNOYING", 10),
                ("SURVEYS", 11),
                ("TEXT_ONLY", 12),
                ("USER_INTERACTIVE", 13),
                ("ALERT_STYLE", 14),
                ("HAS_AUDIO_TOGGLE", 15),
                ("CAN_BE_SKIPPED", 16),
                ("FLASH", 17),
            ],
        ),
        EnumDef::from_pairs(
            CREATIVE_SUBTYPE_AUDIO_VIDEO,
            [
                ("VAST_1_0", 1),
                ("VAST_2_0", 2),
                ("VAST_3_0", 3),
                ("VAST_1_0_WRAPPER", 4),
                ("VAST_2_0_WRAPPER", 5),
                ("VAST_3_0_WRAPPER", 6),
                ("VAST_4_0", 7),
                ("VAST_4_0_WRAPPER", 8),
                ("DAAST_1_0", 9),
                ("DAAST_1_0_WRAPPER", 10),
                ("VAST_4_1", 11),
                ("VAST_4_1_WRAPPER", 12),
                ("VAST_4_2", 13),
                ("VAST_4_2_WRAPPER", 14),
            ],
        ),
        EnumDef::from_pairs(
            CREATIVE_SUBTYPE_DISPLAY,
            [
                ("HTML", 1),
                ("AMPHTML", 2),
                ("STRUCTURED_IMAGE", 3),
                ("STRUCTURED_NATIVE", 4),
            ],
        ),
        EnumDef::from_pairs(
            DELIVERY_METHOD,
            [("STREAMING", 1), ("PROGRESSIVE", 2), ("DOWNLOAD", 3)],
        ),
        EnumDef::from_pairs(
            DEVICE_TYPE,
            [
                ("MOBILE_TABLET", 1),
                ("PERSONAL_COMPUTER", 2),
                ("CONNECTED_TV", 3),
                ("PHONE", 4),
                ("TABLET", 5),
                ("CONNECTED_DEVICE", 6),
                ("SET_TOP_BOX", 7),
                ("OOH_DEVICE", 8),
            ],
        ),
        EnumDef::from_pairs(
            DISPLAY_CONTEXT_TYPE,
            [
                ("CONTENT", 1),
                ("CONTENT_ARTICLE", 2),
                ("CONTENT_VIDEO", 3),
                ("CONTENT_AUDIO", 4),
                ("CONTENT_IMAGE", 5),
                ("CONTENT_USER_GENERATED", 6),
                ("SOCIAL", 10),
                ("SOCIAL_EMAIL", 11),
                ("SOCIAL_CHAT", 12),
                ("PRODUCT", 20),
                ("PRODUCT_MARKETPLACE", 21),
                ("PRODUCT_REVIEW", 22),
            ],
        ),
        EnumDef::from_pairs(
            DISPLAY_PLACEMENT_TYPE,
            [
                ("IN_FEED", 1),
                ("SIDEBAR", 2),
                ("INTERSTITIAL", 3),
                ("FLOATING", 4),
            ],
        ),
        EnumDef::from_pairs(
            EVENT_TRACKING_METHOD,
            EventTrackingMethod::ALL.map(|m| (m.symbol(), m.code())),
        ),
        EnumDef::from_pairs(
            EVENT_TYPE,
            [
                ("LOADED", 1),
                ("IMPRESSION", 2),
                ("VIEWABLE_MRC_50", 3),
                ("VIEWABLE_MRC_100", 4),
                ("VIEWABLE_VIDEO_50", 5),
            ],
        ),
        EnumDef::from_pairs(
            EXPANDABLE_DIRECTION,
            [
                ("LEFT", 1),
                ("RIGHT", 2),
                ("UP", 3),
                ("DOWN", 4),
                ("FULL_SCREEN", 5),
                ("RESIZE_MINIMIZE", 6),
            ],
        ),
        EnumDef::from_pairs(
            FEED_TYPE,
            [
                ("MUSIC_SERVICE", 1),
                ("FM_AM_BROADCAST", 2),
                ("PODCAST", 3),
                ("CATCHUP_RADIO", 4),
                ("WEB_RADIO", 5),
                ("VIDEO_GAME", 6),
                ("TEXT_TO_SPEECH", 7),
            ],
        ),
        EnumDef::from_pairs(
            ID_MATCH_METHOD,
            [
                ("NO_MATCHING", 1),
                ("BROWSER_COOKIE_SYNC", 2),
                ("AUTHENTICATED", 3),
                ("OBSERVED", 4),
                ("INFERENCE", 5),
            ],
        ),
        EnumDef::from_pairs(LINEARITY_MODE, [("LINEAR", 1), ("NON_LINEAR", 2)]),
        EnumDef::from_pairs(
            LOCATION_SERVICE,
            [
                ("IP2LOCATION", 1),
                ("NEUSTAR", 2),
                ("MAXMIND", 3),
                ("NETACUITY", 4),
            ],
        ),
        EnumDef::from_pairs(
            LOCATION_TYPE,
            [("GPS", 1), ("IP", 2), ("USER_PROVIDED", 3)],
        ),
        EnumDef::from_pairs(
            MEDIA_RATING,
            [("ALL_AUDIENCES", 1), ("OVER_12", 2), ("MATURE", 3)],
        ),
        EnumDef::from_pairs(
            NATIVE_DATA_ASSET_TYPE,
            [
                ("SPONSORED", 1),
                ("DESCRIPTIVE_TEXT", 2),
                ("RATING", 3),
                ("LIKES", 4),
                ("DOWNLOADS", 5),
                ("PRICE", 6),
                ("SALE_PRICE", 7),
                ("PHONE", 8),
                ("ADDRESS", 9),
                ("DESCRIPTIVE_TEXT_2", 10),
                ("DISPLAY_URL", 11),
                ("CTA_TEXT", 12),
            ],
        ),
        EnumDef::from_pairs(NATIVE_IMAGE_ASSET_TYPE, [("ICON", 1), ("MAIN", 3)]),
        EnumDef::from_pairs(
            OPERATING_SYSTEM,
            [
                ("OS_3DS", 1),
                ("ANDROID", 2),
                ("APPLE_TV", 3),
                ("ASHA", 4),
                ("BADA", 5),
                ("BLACKBERRY", 6),
                ("BREW", 7),
                ("CHROME_OS", 8),
                ("DARWIN", 9),
                ("FIRE_OS", 10),
                ("FIREFOX_OS", 11),
                ("HELEN_OS", 12),
                ("IOS", 13),
                ("LINUX", 14),
                ("MAC_OS", 15),
                ("MEEGO", 16),
                ("MOROS", 17),
                ("NETBSD", 18),
                ("NUCLEUS", 19),
                ("QNX", 20),
                ("SAILFISH", 21),
                ("SERIES_10", 22),
                ("SERIES_20", 23),
                ("SERIES_30", 24),
                ("SERIES_40", 25),
                ("SERIES_60", 26),
                ("SYMBIAN", 27),
                ("TIZEN", 28),
            ],
        ),
        EnumDef::from_pairs(
            PLACEMENT_POSITION,
            [
                ("ABOVE_FOLD", 1),
                ("BELOW_FOLD", 3),
                ("HEADER", 4),
                ("FOOTER", 5),
                ("SIDEBAR", 6),
                ("FULL_SCREEN", 7),
            ],
        ),
        EnumDef::from_pairs(
            PLAYBACK_CESSATION_MODE,
            [
                ("ON_COMPLETION_OR_USER", 1),
                ("ON_LEAVING_VIEWPORT_OR_USER", 2),
                ("ON_LEAVING_VIEWPORT_CONTINUES_FLOATING", 3),
            ],
        ),
        EnumDef::from_pairs(
            PLAYBACK_METHOD,
            [
                ("PAGE_LOAD_SOUND_ON", 1),
                ("PAGE_LOAD_SOUND_OFF", 2),
                ("CLICK_SOUND_ON", 3),
                ("MOUSE_OVER_SOUND_ON", 4),
                ("VIEWPORT_ENTER_SOUND_ON", 5),
                ("VIEWPORT_ENTER_SOUND_OFF", 6),
            ],
        ),
        EnumDef::from_pairs(
            PRODUCTION_QUALITY,
            [("PROFESSIONAL", 1), ("PROSUMER", 2), ("USER_GENERATED", 3)],
        ),
        EnumDef::from_pairs(SIZE_UNIT, SizeUnit::ALL.map(|u| (u.symbol(), u.code()))),
        EnumDef::from_pairs(
            USER_AGENT_SOURCE,
            [
                ("CLIENT_HINTS_LOW_ENTROPY", 1),
                ("CLIENT_HINTS_HIGH_ENTROPY", 2),
                ("USER_AGENT_STRING", 3),
            ],
        ),
        EnumDef::from_pairs(
            VIDEO_PLACEMENT_SUBTYPE,
            [
                ("INSTREAM", 1),
                ("ACCOMPANYING_CONTENT", 2),
                ("INTERSTITIAL", 3),
                ("NO_CONTENT_STANDALONE", 4),
            ],
        ),
        EnumDef::from_pairs(
            VOLUME_NORMALIZATION_MODE,
            [
                ("AVERAGE_VOLUME", 1),
                ("PEAK_VOLUME", 2),
                ("LOUDNESS", 3),
                ("CUSTOM_VOLUME", 4),
            ],
        ),
    ]
}
