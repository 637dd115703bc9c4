//! View model for the movie card: what is shown, in which order, decoupled
//! from any particular renderer.

use shared::domain::MovieRecord;

pub const FETCH_BUTTON_LABEL: &str = "Fetch Movie Details";
pub const RATINGS_HEADING: &str = "Ratings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRow {
    pub source: String,
    pub value: String,
}

/// Year and runtime overlaid on the poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterCaption {
    pub year: String,
    pub runtime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub plot: String,
    pub poster_url: Option<String>,
    pub caption: PosterCaption,
    pub info: Vec<InfoItem>,
    pub ratings: Vec<RatingRow>,
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

impl MovieCard {
    pub fn from_record(record: &MovieRecord) -> Self {
        let item = |label, field: &Option<String>| InfoItem {
            label,
            value: text(field),
        };
        Self {
            title: text(&record.title),
            plot: text(&record.plot),
            poster_url: record.poster_url().map(str::to_string),
            caption: PosterCaption {
                year: text(&record.year),
                runtime: text(&record.runtime),
            },
            info: vec![
                item("Year", &record.year),
                item("Rated", &record.rated),
                item("Runtime", &record.runtime),
                item("Genre", &record.genre),
                item("Director", &record.director),
                item("Actors", &record.actors),
                item("Box Office", &record.box_office),
                item("IMDb Rating", &record.imdb_rating),
            ],
            ratings: record
                .ratings
                .iter()
                .map(|rating| RatingRow {
                    source: text(&rating.source),
                    value: text(&rating.value),
                })
                .collect(),
        }
    }

    /// Plain-text rendering, one line per visual row.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone(), String::new(), self.plot.clone()];
        if let Some(url) = &self.poster_url {
            lines.push(format!("Poster: {url}"));
        }
        lines.push(String::new());
        lines.extend(
            self.info
                .iter()
                .map(|item| format!("{}: {}", item.label, item.value)),
        );
        lines.push(String::new());
        lines.push(RATINGS_HEADING.to_string());
        lines.extend(
            self.ratings
                .iter()
                .map(|row| format!("  {:<28}{}", row.source, row.value)),
        );
        lines
    }
}

/// State of the single fetch control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerButton {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

impl TriggerButton {
    pub fn for_in_flight(in_flight: bool) -> Self {
        Self {
            enabled: !in_flight,
            busy: in_flight,
            label: FETCH_BUTTON_LABEL,
        }
    }
}

#[cfg(test)]
#[path = "tests/card_tests.rs"]
mod tests;
