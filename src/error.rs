use std::path::PathBuf;

use thiserror::Error;

use crate::models::QuestionError;

/// Malformed caller input. The only error that reaches callers of the
/// assembler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Topic is required")]
    EmptyTopic,

    #[error("Level must be 1-5")]
    LevelOutOfRange(i64),
}

/// Anything that went wrong while asking the AI provider for questions.
///
/// These never leave the assembler: each one triggers the fallback chain.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no AI credential configured")]
    MissingCredential,

    #[error("AI credential rejected: {0}")]
    UnusableCredential(&'static str),

    #[error("AI request timed out")]
    Timeout,

    #[error("AI request failed: {0}")]
    Network(String),

    #[error("AI provider returned status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("AI response had no text content")]
    EmptyContent,

    #[error("AI response was not valid JSON: {0}")]
    Malformed(String),

    #[error("AI response had the wrong shape: {0}")]
    Shape(#[from] QuestionError),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// Error loading a static question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("topic '{topic}' level {level}: {source}")]
    InvalidSet {
        topic: String,
        level: u8,
        #[source]
        source: QuestionError,
    },

    #[error("invalid question bank: {0}")]
    Invalid(String),
}
