use thiserror::Error;

/// Failures surfaced by [`crate::AnalysisClient::analyze`].
///
/// The UI collapses all of them into one message; the variants exist for logs.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis service returned no text")]
    EmptyResponse,
    #[error("analysis response does not match the report shape: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("analysis service unavailable: {reason}")]
    ServiceUnavailable { reason: String },
}

impl AnalysisError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            reason: reason.into(),
        }
    }

    /// Stable label for structured logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse(_) => "malformed_response",
            Self::ServiceUnavailable { .. } => "service_unavailable",
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        Self::unavailable(err.to_string())
    }
}
