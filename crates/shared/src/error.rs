use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope the upstream API returns (often with HTTP 200), e.g.
/// `{"Response":"False","Error":"Invalid API key!"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpstreamErrorBody {
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl UpstreamErrorBody {
    pub fn is_failure(&self) -> bool {
        self.response.eq_ignore_ascii_case("false")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("upstream rejected request: {message}")]
pub struct UpstreamError {
    pub message: String,
}

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<UpstreamErrorBody> for UpstreamError {
    fn from(value: UpstreamErrorBody) -> Self {
        Self::new(
            value
                .error
                .unwrap_or_else(|| "unspecified upstream error".to_string()),
        )
    }
}
