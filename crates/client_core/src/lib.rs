//! HTTP client for the movie lookup endpoint plus the card view model shared
//! by the desktop apps.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::MovieRecord,
    error::UpstreamErrorBody,
    protocol::{parse_movie_body, MovieBody, MovieQuery},
};
use tracing::{debug, info};
use url::Url;

pub mod card;
pub mod config;
pub mod error;

pub use card::{InfoItem, MovieCard, PosterCaption, RatingRow, TriggerButton};
pub use config::{load_settings, Settings};
pub use error::FetchError;
pub use reqwest::StatusCode;

/// Where movie records and poster bytes come from.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_movie(&self) -> Result<MovieRecord, FetchError>;
    async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub struct MovieClient {
    http: Client,
    base_url: Url,
    query: MovieQuery,
}

impl MovieClient {
    pub fn new(base_url: Url, query: MovieQuery) -> Self {
        Self {
            http: Client::new(),
            base_url,
            query,
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = settings
            .base_url()
            .context("invalid movie API base url")?;
        Ok(Self::new(base_url, settings.movie_query()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn query(&self) -> &MovieQuery {
        &self.query
    }
}

#[async_trait]
impl MovieSource for MovieClient {
    async fn fetch_movie(&self) -> Result<MovieRecord, FetchError> {
        debug!(imdb_id = %self.query.imdb_id, "requesting movie record");
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&self.query)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            // The API reports bad keys as 401 with its usual error envelope.
            if let Ok(envelope) = serde_json::from_slice::<UpstreamErrorBody>(&body) {
                if envelope.is_failure() {
                    return Err(FetchError::Upstream(envelope.into()));
                }
            }
            return Err(FetchError::Status(status));
        }

        match parse_movie_body(&body)? {
            MovieBody::Record(record) => {
                info!(
                    imdb_id = %self.query.imdb_id,
                    title = record.title.as_deref().unwrap_or_default(),
                    ratings = record.ratings.len(),
                    "movie record received"
                );
                Ok(record)
            }
            MovieBody::Rejected(err) => Err(err.into()),
        }
    }

    async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        debug!(url, size = bytes.len(), "poster downloaded");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
