use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::{
    domain::{ApiKey, ImdbId},
    protocol::{MovieQuery, DEFAULT_API_BASE_URL, DEFAULT_API_KEY, DEFAULT_IMDB_ID},
};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "movie_card.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub imdb_id: String,
    pub api_key: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            imdb_id: DEFAULT_IMDB_ID.into(),
            api_key: DEFAULT_API_KEY.into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn base_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(self.api_base_url.trim())
            .with_context(|| format!("failed to parse api base url '{}'", self.api_base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api base url '{url}' must use http or https");
        }
        Ok(url)
    }

    pub fn movie_query(&self) -> MovieQuery {
        MovieQuery {
            imdb_id: ImdbId(self.imdb_id.clone()),
            api_key: ApiKey(self.api_key.clone()),
        }
    }
}

/// Defaults, then the settings file, then environment overrides.
///
/// A missing default file is ignored; an explicitly requested file must exist.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    if let Some(raw) = read_settings_file(&path, explicit_path.is_some())? {
        apply_file_overrides(&mut settings, &raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.base_url()?;
    Ok(settings)
}

/// Reads the settings file. Only an absent default file is silently skipped;
/// other read failures on the default file are logged and skipped.
fn read_settings_file(path: &Path, required: bool) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if required => Err(err)
            .with_context(|| format!("failed to read settings file '{}'", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                "ignoring unreadable settings file: {err}"
            );
            Ok(None)
        }
    }
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)?;
    if let Some(v) = file_cfg.get("api_base_url") {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("imdb_id") {
        settings.imdb_id = v.clone();
    }
    if let Some(v) = file_cfg.get("api_key") {
        settings.api_key = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("MOVIE_CARD_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = non_empty("MOVIE_CARD_IMDB_ID") {
        settings.imdb_id = v;
    }
    if let Some(v) = non_empty("MOVIE_CARD_API_KEY") {
        settings.api_key = v;
    }
    if let Some(v) = non_empty("MOVIE_CARD_LOG") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
