//! View state and its transitions. Everything the card renders is derived
//! from [`ViewState`]; only backend events and the trigger mutate it.

use client_core::{MovieCard, TriggerButton};
use shared::domain::MovieRecord;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiEvent};
use crate::media::PosterImage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterState {
    Loading,
    Ready(PosterImage),
    Failed,
}

#[derive(Debug, Default)]
pub struct ViewState {
    movie: Option<MovieRecord>,
    in_flight: bool,
    poster: Option<(String, PosterState)>,
}

impl ViewState {
    pub fn movie(&self) -> Option<&MovieRecord> {
        self.movie.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn trigger(&self) -> TriggerButton {
        TriggerButton::for_in_flight(self.in_flight)
    }

    pub fn card(&self) -> Option<MovieCard> {
        self.movie().map(MovieCard::from_record)
    }

    pub fn poster(&self) -> Option<(&str, &PosterState)> {
        self.poster
            .as_ref()
            .map(|(url, state)| (url.as_str(), state))
    }

    pub fn has_pending_work(&self) -> bool {
        self.in_flight || matches!(self.poster(), Some((_, PosterState::Loading)))
    }

    /// Marks a fetch as outstanding. Returns `None` while one already is.
    pub fn begin_fetch(&mut self) -> Option<BackendCommand> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(BackendCommand::FetchMovie)
    }

    /// The fetch command never reached the worker.
    pub fn abort_fetch(&mut self, err: &UiError) {
        tracing::warn!(
            category = err_label(err.category()),
            "movie fetch not started: {}",
            err.message()
        );
        self.in_flight = false;
    }

    pub fn apply(&mut self, event: UiEvent) -> Option<BackendCommand> {
        match event {
            UiEvent::MovieLoaded(record) => {
                self.in_flight = false;
                let follow_up = self.retarget_poster(record.poster_url());
                self.movie = Some(record);
                follow_up
            }
            UiEvent::MovieFetchFailed(err) => {
                self.in_flight = false;
                tracing::warn!(
                    category = err_label(err.category()),
                    context = ?err.context(),
                    "movie fetch failed; keeping current card: {}",
                    err.message()
                );
                None
            }
            UiEvent::PosterLoaded { url, image } => {
                match &mut self.poster {
                    Some((current, state)) if *current == url => {
                        *state = PosterState::Ready(image);
                    }
                    _ => tracing::debug!(url = %url, "dropping poster for a card no longer shown"),
                }
                None
            }
            UiEvent::PosterFailed { url, error } => {
                tracing::warn!(
                    url = %url,
                    category = err_label(error.category()),
                    "poster load failed: {}",
                    error.message()
                );
                if let Some((current, state)) = &mut self.poster {
                    if *current == url {
                        *state = PosterState::Failed;
                    }
                }
                None
            }
            UiEvent::BackendStopped(err) => {
                tracing::error!(
                    category = err_label(err.category()),
                    context = ?err.context(),
                    "backend worker unavailable: {}",
                    err.message()
                );
                self.in_flight = false;
                None
            }
        }
    }

    fn retarget_poster(&mut self, next_url: Option<&str>) -> Option<BackendCommand> {
        let Some(next_url) = next_url else {
            self.poster = None;
            return None;
        };
        if matches!(&self.poster, Some((current, _)) if current == next_url) {
            return None;
        }
        self.poster = Some((next_url.to_string(), PosterState::Loading));
        Some(BackendCommand::FetchPoster {
            url: next_url.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
