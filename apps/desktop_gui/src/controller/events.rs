//! Backend-to-UI events and error modeling for the view controller.

use client_core::FetchError;
use shared::domain::MovieRecord;

use crate::media::PosterImage;

#[derive(Debug)]
pub enum UiEvent {
    MovieLoaded(MovieRecord),
    MovieFetchFailed(UiError),
    PosterLoaded { url: String, image: PosterImage },
    PosterFailed { url: String, error: UiError },
    BackendStopped(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Decode,
    Upstream,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    FetchMovie,
    FetchPoster,
    Dispatch,
}

/// Failure details kept for logging. The card never displays these.
#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_fetch(context: UiErrorContext, err: &FetchError) -> Self {
        let category = match err {
            FetchError::Transport(_) | FetchError::Status(_) => UiErrorCategory::Transport,
            FetchError::Decode(_) => UiErrorCategory::Decode,
            FetchError::Upstream(_) => UiErrorCategory::Upstream,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("decode")
            || lower.contains("malformed")
            || lower.contains("format")
        {
            UiErrorCategory::Decode
        } else if lower.contains("disconnected")
            || lower.contains("connection")
            || lower.contains("timed out")
            || lower.contains("queue")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "transport",
        UiErrorCategory::Decode => "decode",
        UiErrorCategory::Upstream => "upstream",
        UiErrorCategory::Unknown => "unexpected",
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
