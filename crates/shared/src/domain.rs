use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder the upstream API uses for fields it has no value for.
pub const NOT_AVAILABLE: &str = "N/A";

macro_rules! string_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_newtype!(ImdbId);
string_newtype!(ApiKey);

/// A single `{Source, Value}` pair from the upstream `Ratings` array.
/// Either side may be missing or `null`; the row is still kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingEntry {
    pub source: Option<String>,
    pub value: Option<String>,
}

/// Flat pass-through of the upstream movie document.
///
/// Every scalar is optional and kept as the raw string the API returned.
/// `ratings` is empty when the key is absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ratings: Vec<RatingEntry>,
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<ImdbId>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    pub box_office: Option<String>,
    pub production: Option<String>,
    pub website: Option<String>,
    pub response: Option<String>,
}

impl MovieRecord {
    /// Poster URL, unless the API reported none.
    pub fn poster_url(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != NOT_AVAILABLE)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RatingEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RatingEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
