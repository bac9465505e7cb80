use serde::{Deserialize, Serialize};

/// Kind of item a search returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    #[default]
    #[serde(rename = "clip")]
    Video,
    People,
    Channel,
    Group,
}

impl SearchFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "clip",
            Self::People => "people",
            Self::Channel => "channel",
            Self::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    Latest,
    Popularity,
    Alphabetical,
    Duration,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Latest => "latest",
            Self::Popularity => "popularity",
            Self::Alphabetical => "alphabetical",
            Self::Duration => "duration",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Platform content categories. Searching every category is expressed as
/// `Option::<SearchCategory>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    Trailers,
    Narrative,
    Documentary,
    Experimental,
    Animation,
    Educational,
    AdsAndCommercials,
    Music,
    BrandedContent,
    Sports,
    Travel,
    CameraTechniques,
    Comedy,
    Events,
    Fashion,
    Food,
    IdentsAndAnimatedLogos,
    Industry,
    Instructionals,
    Journalism,
    Personal,
    Product,
    Talks,
    TitlesAndCredits,
    VideoSchool,
    Wedding,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 26] = [
        Self::Trailers,
        Self::Narrative,
        Self::Documentary,
        Self::Experimental,
        Self::Animation,
        Self::Educational,
        Self::AdsAndCommercials,
        Self::Music,
        Self::BrandedContent,
        Self::Sports,
        Self::Travel,
        Self::CameraTechniques,
        Self::Comedy,
        Self::Events,
        Self::Fashion,
        Self::Food,
        Self::IdentsAndAnimatedLogos,
        Self::Industry,
        Self::Instructionals,
        Self::Journalism,
        Self::Personal,
        Self::Product,
        Self::Talks,
        Self::TitlesAndCredits,
        Self::VideoSchool,
        Self::Wedding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trailers => "trailers",
            Self::Narrative => "narrative",
            Self::Documentary => "documentary",
            Self::Experimental => "experimental",
            Self::Animation => "animation",
            Self::Educational => "educational",
            Self::AdsAndCommercials => "adsandcommercials",
            Self::Music => "music",
            Self::BrandedContent => "brandedcontent",
            Self::Sports => "sports",
            Self::Travel => "travel",
            Self::CameraTechniques => "cameratechniques",
            Self::Comedy => "comedy",
            Self::Events => "events",
            Self::Fashion => "fashion",
            Self::Food => "food",
            Self::IdentsAndAnimatedLogos => "identsandanimatedlogos",
            Self::Industry => "industry",
            Self::Instructionals => "instructionals",
            Self::Journalism => "journalism",
            Self::Personal => "personal",
            Self::Product => "product",
            Self::Talks => "talks",
            Self::TitlesAndCredits => "titlesandcredits",
            Self::VideoSchool => "videoschool",
            Self::Wedding => "wedding",
        }
    }
}
