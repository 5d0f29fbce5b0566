use thiserror::Error;

/// Custom error types for the claimlens client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please provide the API URL.")]
    MissingApiUrl,

    #[error("Please enter some text to validate.")]
    MissingText,

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response from API: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("System error: {0}")]
    SystemError(String),
}

impl ClientError {
    /// True for the local input-validation errors that never reach the network.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ClientError::MissingApiUrl | ClientError::MissingText)
    }
}

/// Result type specific to client operations
pub type ClientResult<T> = Result<T, ClientError>;
