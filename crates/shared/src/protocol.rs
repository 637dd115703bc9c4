use serde::{Deserialize, Serialize};

use crate::{
    domain::{ApiKey, ImdbId, MovieRecord},
    error::{UpstreamError, UpstreamErrorBody},
};

/// Identifier the view always asks for.
pub const DEFAULT_IMDB_ID: &str = "tt3896198";
/// Access key embedded in every request.
pub const DEFAULT_API_KEY: &str = "9799e6a9";
pub const DEFAULT_API_BASE_URL: &str = "http://www.omdbapi.com/";

/// Query string for a lookup by IMDb id: `i=<id>&apikey=<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    #[serde(rename = "i")]
    pub imdb_id: ImdbId,
    #[serde(rename = "apikey")]
    pub api_key: ApiKey,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            imdb_id: ImdbId::from(DEFAULT_IMDB_ID),
            api_key: ApiKey::from(DEFAULT_API_KEY),
        }
    }
}

#[derive(Debug)]
pub enum MovieBody {
    Record(MovieRecord),
    Rejected(UpstreamError),
}

/// Decodes a response body, separating the error envelope from a record.
pub fn parse_movie_body(bytes: &[u8]) -> Result<MovieBody, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("expected a JSON object"));
    }
    if let Ok(envelope) = serde_json::from_value::<UpstreamErrorBody>(value.clone()) {
        if envelope.is_failure() {
            return Ok(MovieBody::Rejected(envelope.into()));
        }
    }
    let record = serde_json::from_value(value)?;
    Ok(MovieBody::Record(record))
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
