use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Analysis request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Whether a retry of the same submission could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AnalysisError::Network(_) | AnalysisError::Timeout(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
