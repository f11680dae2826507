//! Static Open Graph schema table.
//!
//! Top-level properties are always checked. Sub-properties are only legal
//! under a particular `og:type` value and live in that type's [`TypeVariant`].

use std::fmt;

/// Property name whose value selects the sub-property variant.
pub const DISCRIMINATOR: &str = "og:type";

/// Declared type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Integer,
    Boolean,
    Enum,
    DateTime,
    Url,
    Profile,
    /// Reference to another Open Graph object (e.g. `music.album`).
    /// Not checkable; values always fail.
    Object(&'static str),
}

impl ValueType {
    pub fn tag(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Boolean => "boolean",
            ValueType::Enum => "enum",
            ValueType::DateTime => "datetime",
            ValueType::Url => "url",
            ValueType::Profile => "profile",
            ValueType::Object(name) => *name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Schema for one property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub name: &'static str,
    pub required: bool,
    pub value_type: ValueType,
    /// Legal values when `value_type` is [`ValueType::Enum`].
    pub enums: &'static [&'static str],
    pub array_allowed: bool,
    pub description: &'static str,
    /// `og:image:width` style properties describing this one. Informational.
    pub structured: &'static [SchemaEntry],
}

impl SchemaEntry {
    const fn new(name: &'static str, value_type: ValueType, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            value_type,
            enums: &[],
            array_allowed: false,
            description,
            structured: &[],
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn array(mut self) -> Self {
        self.array_allowed = true;
        self
    }

    const fn enums(mut self, enums: &'static [&'static str]) -> Self {
        self.enums = enums;
        self
    }

    const fn structured(mut self, structured: &'static [SchemaEntry]) -> Self {
        self.structured = structured;
        self
    }
}

/// Sub-property schema selected by one schema-2 `og:type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeVariant {
    pub name: &'static str,
    pub namespace: &'static str,
    /// Governs whether every sub-property below is critical.
    pub required: bool,
    pub properties: &'static [SchemaEntry],
}

impl TypeVariant {
    pub(crate) const fn new(
        name: &'static str,
        namespace: &'static str,
        properties: &'static [SchemaEntry],
    ) -> Self {
        Self {
            name,
            namespace,
            required: false,
            properties,
        }
    }

    // No built-in variant is required.
    #[allow(dead_code)]
    pub(crate) const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A schema-1 `og:type` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyType {
    pub name: &'static str,
    pub grouping: &'static str,
}

const fn legacy(name: &'static str, grouping: &'static str) -> LegacyType {
    LegacyType { name, grouping }
}

use ValueType::*;

const SECURE_URL: &str = "An alternate url to use if the webpage requires HTTPS.";
const PRODUCT_CODE: &str = "For products which have a UPC code or ISBN number, you can specify them using the og:upc and og:isbn properties. These properties help uniquely identify products.";

const IMAGE_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("og:image:url", Url, "Identical to og:image."),
    SchemaEntry::new("og:image:secure_url", Url, SECURE_URL),
    SchemaEntry::new("og:image:type", String, "A MIME type for this image."),
    SchemaEntry::new("og:image:width", Integer, "The number of pixels wide."),
    SchemaEntry::new("og:image:height", Integer, "The number of pixels high."),
];

const AUDIO_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("og:audio:secure_url", Url, SECURE_URL),
    SchemaEntry::new("og:audio:type", String, "A MIME type for this audio."),
    SchemaEntry::new("og:audio:title", String, "Song title. Not part of the 2.0 protocol."),
    SchemaEntry::new("og:audio:artist", String, "Song artist. Not part of the 2.0 protocol."),
    SchemaEntry::new("og:audio:album", String, "Song album. Not part of the 2.0 protocol."),
];

const VIDEO_STRUCTURED: &[SchemaEntry] = &[
    SchemaEntry::new("og:video:secure_url", Url, SECURE_URL),
    SchemaEntry::new("og:video:type", String, "A MIME type for this video."),
    SchemaEntry::new("og:video:width", Integer, "The number of pixels wide."),
    SchemaEntry::new("og:video:height", Integer, "The number of pixels high."),
];

pub static PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new(
        "og:title",
        String,
        "The title of your object as it should appear within the graph, e.g., \"The Rock\".",
    )
    .required(),
    SchemaEntry::new(
        "og:type",
        String,
        "The type of your object, e.g., \"movie\". See the complete list of supported types.",
    )
    .required(),
    SchemaEntry::new(
        "og:image",
        Url,
        "An image URL which should represent your object within the graph. You may include multiple og:image tags to associate multiple images with your page.",
    )
    .required()
    .structured(IMAGE_PROPERTIES),
    SchemaEntry::new(
        "og:url",
        Url,
        "The canonical URL of your object that will be used as its permanent ID in the graph, e.g., http://www.imdb.com/title/tt0117500/",
    )
    .required(),
    SchemaEntry::new(
        "og:site_name",
        String,
        "A human-readable name for your site, e.g., \"IMDb\".",
    ),
    SchemaEntry::new(
        "og:description",
        String,
        "A one to two sentence description of your page.",
    ),
    SchemaEntry::new("og:isbn", String, PRODUCT_CODE),
    SchemaEntry::new("og:upc", String, PRODUCT_CODE),
    SchemaEntry::new(
        "og:audio",
        Url,
        "A URL to an audio file to accompany this object.",
    )
    .structured(AUDIO_PROPERTIES),
    SchemaEntry::new(
        "og:determiner",
        Enum,
        "The word that appears before this object's title in a sentence. If auto is chosen, the consumer of your data should chose between \"a\" or \"an\". Default is \"\" (blank).",
    )
    .enums(&["a", "an", "the", "", "auto"]),
    SchemaEntry::new(
        "og:locale",
        String,
        "The locale these tags are marked up in. Of the format language_TERRITORY. Default is en_US.",
    ),
    SchemaEntry::new(
        "og:locale:alternate",
        String,
        "An array of other locales this page is available in.",
    )
    .array(),
    SchemaEntry::new(
        "og:video",
        Url,
        "A URL to a video file that complements this object. If you specify more than one og:video, then og:video:type is required for each video.",
    )
    .structured(VIDEO_STRUCTURED),
];

pub static FACEBOOK_EXTENSIONS: &[SchemaEntry] = &[
    SchemaEntry::new(
        "fb:admins",
        String,
        "A comma-separated list of the user IDs or usernames of the Facebook accounts who own the page.",
    ),
    SchemaEntry::new(
        "fb:app_id",
        String,
        "A Facebook Platform application ID that administers this page.",
    ),
];

pub static LEGACY_TYPES: &[LegacyType] = &[
    legacy("activity", "Activities"),
    legacy("sport", "Activities"),
    legacy("bar", "Businesses"),
    legacy("company", "Businesses"),
    legacy("cafe", "Businesses"),
    legacy("hotel", "Businesses"),
    legacy("restaurant", "Businesses"),
    legacy("cause", "Groups"),
    legacy("sports_league", "Groups"),
    legacy("sports_team", "Groups"),
    legacy("band", "Organizations"),
    legacy("government", "Organizations"),
    legacy("non_profit", "Organizations"),
    legacy("school", "Organizations"),
    legacy("university", "Organizations"),
    legacy("actor", "People"),
    legacy("athlete", "People"),
    legacy("author", "People"),
    legacy("director", "People"),
    legacy("musician", "People"),
    legacy("politician", "People"),
    legacy("public_figure", "People"),
    legacy("city", "Places"),
    legacy("country", "Places"),
    legacy("landmark", "Places"),
    legacy("state_province", "Places"),
    legacy("album", "Products and Entertainment"),
    legacy("book", "Products and Entertainment"),
    legacy("drink", "Products and Entertainment"),
    legacy("food", "Products and Entertainment"),
    legacy("game", "Products and Entertainment"),
    legacy("product", "Products and Entertainment"),
    legacy("song", "Products and Entertainment"),
    legacy("movie", "Products and Entertainment"),
    legacy("tv_show", "Products and Entertainment"),
    legacy("blog", "Websites"),
    legacy("website", "Websites"),
    legacy("article", "Websites"),
    legacy("game.achievement", "Game"),
];

const VIDEO_NS: &str = "http://ogp.me/ns/video#";
const MUSIC_NS: &str = "http://ogp.me/ns/music#";

const VIDEO_ACTOR: SchemaEntry =
    SchemaEntry::new("video:actor", Profile, "Actors in the movie.").array();
const VIDEO_ACTOR_ROLE: SchemaEntry =
    SchemaEntry::new("video:actor:role", String, "The role they played.");
const VIDEO_DIRECTOR: SchemaEntry =
    SchemaEntry::new("video:director", Profile, "Directors of the movie.").array();
const VIDEO_WRITER: SchemaEntry =
    SchemaEntry::new("video:writer", Profile, "Writers of the movie.").array();
const VIDEO_DURATION: SchemaEntry =
    SchemaEntry::new("video:duration", Integer, "The movie's length in seconds.");
const VIDEO_RELEASE_DATE: SchemaEntry =
    SchemaEntry::new("video:release_date", DateTime, "The date the movie was released.");
const VIDEO_TAG: SchemaEntry =
    SchemaEntry::new("video:tag", String, "Tag words associated with this video.").array();

const VIDEO_PROPERTIES: &[SchemaEntry] = &[
    VIDEO_ACTOR,
    VIDEO_ACTOR_ROLE,
    VIDEO_DIRECTOR,
    VIDEO_WRITER,
    VIDEO_DURATION,
    VIDEO_RELEASE_DATE,
    VIDEO_TAG,
];

const SONG_DISC: SchemaEntry =
    SchemaEntry::new("music:song:disc", Integer, "The disc the song is on for the album.");
const SONG_TRACK: SchemaEntry = SchemaEntry::new(
    "music:song:track",
    Integer,
    "The track number the song is on for the album.",
);

const ARTICLE_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new(
        "article:published_time",
        DateTime,
        "When the article was first published.",
    ),
    SchemaEntry::new(
        "article:modified_time",
        DateTime,
        "When the article was last changed.",
    ),
    SchemaEntry::new(
        "article:expiration_time",
        DateTime,
        "When the article is out of date after.",
    ),
    SchemaEntry::new("article:author", Profile, "Writers of the article.").array(),
    SchemaEntry::new(
        "article:section",
        String,
        "A high-level section name. E.g. Technology",
    ),
    SchemaEntry::new("article:tag", String, "Tag words associated with this article.")
        .array(),
];

const BOOK_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("book:author", Profile, "Who wrote this book.").array(),
    SchemaEntry::new("book:isbn", String, "The ISBN"),
    SchemaEntry::new("book:release_date", DateTime, "The date the book was released."),
    SchemaEntry::new("book:tag", String, "Tag words associated with this book.").array(),
];

const PROFILE_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("profile:first_name", String, "First name."),
    SchemaEntry::new("profile:last_name", String, "Last name."),
    SchemaEntry::new(
        "profile:username",
        String,
        "A short unique string to identify them.",
    ),
    SchemaEntry::new("profile:gender", Enum, "Their gender.").enums(&["male", "female"]),
];

const VIDEO_EPISODE_PROPERTIES: &[SchemaEntry] = &[
    VIDEO_ACTOR,
    VIDEO_ACTOR_ROLE,
    VIDEO_DIRECTOR,
    VIDEO_WRITER,
    VIDEO_DURATION,
    VIDEO_RELEASE_DATE,
    VIDEO_TAG,
    SchemaEntry::new(
        "video:series",
        Object("video.tv_show"),
        "Which series this episode belongs to.",
    ),
];

const MUSIC_SONG_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("music:duration", Integer, "The song's length in seconds."),
    SchemaEntry::new(
        "music:album",
        Object("music.album"),
        "The album this song is from.",
    )
    .array(),
    SchemaEntry::new(
        "music:album:disc",
        Integer,
        "Which disc of the album this song is on.",
    ),
    SchemaEntry::new("music:album:track", Integer, "Which track this song is."),
    SchemaEntry::new("music:musician", Profile, "The musician that made this song.")
        .array(),
];

const MUSIC_ALBUM_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("music:song", Object("music.song"), "The song on this album."),
    SONG_DISC,
    SONG_TRACK,
    SchemaEntry::new("music:musician", Profile, "The musician that made this song."),
    SchemaEntry::new(
        "music:release_date",
        DateTime,
        "The date the album was released.",
    ),
];

const MUSIC_PLAYLIST_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("music:song", Object("music.song"), "The song."),
    SONG_DISC,
    SONG_TRACK,
    SchemaEntry::new("music:creator", Profile, "The creator of this playlist."),
];

const MUSIC_RADIO_STATION_PROPERTIES: &[SchemaEntry] = &[
    SchemaEntry::new("music:creator", Profile, "The creator of this station."),
];

pub static VARIANTS: &[TypeVariant] = &[
    TypeVariant::new("website", "http://ogp.me/ns/website#", &[]),
    TypeVariant::new("article", "http://ogp.me/ns/article#", ARTICLE_PROPERTIES),
    TypeVariant::new("book", "http://ogp.me/ns/book#", BOOK_PROPERTIES),
    TypeVariant::new("profile", "http://ogp.me/ns/profile#", PROFILE_PROPERTIES),
    TypeVariant::new("video.movie", VIDEO_NS, VIDEO_PROPERTIES),
    TypeVariant::new("video.episode", VIDEO_NS, VIDEO_EPISODE_PROPERTIES),
    TypeVariant::new("video.tv_show", VIDEO_NS, VIDEO_PROPERTIES),
    TypeVariant::new("video.other", VIDEO_NS, VIDEO_PROPERTIES),
    TypeVariant::new("music.song", MUSIC_NS, MUSIC_SONG_PROPERTIES),
    TypeVariant::new("music.album", MUSIC_NS, MUSIC_ALBUM_PROPERTIES),
    TypeVariant::new("music.playlist", MUSIC_NS, MUSIC_PLAYLIST_PROPERTIES),
    TypeVariant::new("music.radio_station", MUSIC_NS, MUSIC_RADIO_STATION_PROPERTIES),
];

/// Top-level entry for `name`.
pub fn property(name: &str) -> Option<&'static SchemaEntry> {
    PROPERTIES.iter().find(|e| e.name == name)
}

/// Schema-2 variant for an `og:type` value.
pub fn variant(og_type: &str) -> Option<&'static TypeVariant> {
    VARIANTS.iter().find(|v| v.name == og_type)
}

/// Schema-1 type for an `og:type` value.
pub fn legacy_type(og_type: &str) -> Option<&'static LegacyType> {
    LEGACY_TYPES.iter().find(|t| t.name == og_type)
}

/// Find any entry named `name`.
///
/// Searches top-level entries, their structured properties, each schema-2
/// variant in order, then Facebook extensions.
pub fn describe(name: &str) -> Option<&'static SchemaEntry> {
    PROPERTIES
        .iter()
        .chain(PROPERTIES.iter().flat_map(|e| e.structured.iter()))
        .chain(VARIANTS.iter().flat_map(|v| v.properties.iter()))
        .chain(FACEBOOK_EXTENSIONS.iter())
        .find(|e| e.name == name)
}
