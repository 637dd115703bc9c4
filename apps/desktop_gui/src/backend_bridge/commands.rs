//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchMovie,
    FetchPoster { url: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchMovie => "fetch_movie",
            Self::FetchPoster { .. } => "fetch_poster",
        }
    }
}
