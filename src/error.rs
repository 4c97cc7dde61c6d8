//! Error types for the attraction generator.

use thiserror::Error;

/// Main error type for generator operations.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Missing or unusable configuration, such as the API credential.
    #[error("configuration error: {0}")]
    Config(String),

    /// Requested attraction count is not a positive integer.
    #[error("Invalid attraction count: {0}. Expected a positive integer (e.g., 100)")]
    InvalidCount(usize),

    /// Transport-level failure while talking to the API.
    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("xAI API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The API returned no choices, or a choice without content.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The response text is not valid JSON, or its elements do not carry
    /// the expected string fields.
    #[error("failed to parse model response as JSON: {message}. Response preview: {preview}")]
    MalformedResponse { message: String, preview: String },

    /// The response parsed as JSON but is neither a list nor an object.
    #[error("unrecognized response shape, expected a JSON list or an object with an \"attractions\" key. Response preview: {preview}")]
    UnexpectedShape { preview: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
