use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Failed to parse input batch: {0}")]
    InvalidPayload(String),

    #[error("Summarization model failed: {0}")]
    ModelError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summarization model returned an empty summary")]
    EmptySummary,

    #[error("Failed to encode summaries: {0}")]
    EncodeError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Failed to configure logging: {0}")]
    LoggingError(String),

    #[error("Summarizer process failed: {0}")]
    ProcessError(String),
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::InvalidPayload(error.to_string())
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for SummarizerError {
    fn from(error: std::io::Error) -> Self {
        SummarizerError::IoError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::ModelError(error.to_string())
    }
}
