use thiserror::Error;

/// Errors that can occur while generating recipe suggestions
#[derive(Error, Debug)]
pub enum CompanionError {
    /// Caller supplied no usable input (no ingredients and no images)
    #[error("Nothing to work with: {0}")]
    Precondition(String),

    /// An image file could not be read or encoded
    #[error("Failed to encode image: {0}")]
    Encoding(String),

    /// The call to the generative model failed
    #[error("AI service error: {0}")]
    AiService(String),

    /// The response body was not valid JSON
    #[error("Failed to parse response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON parsed but a required top-level field was missing or malformed
    #[error("Invalid response format from API: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<reqwest::Error> for CompanionError {
    fn from(err: reqwest::Error) -> Self {
        CompanionError::AiService(err.to_string())
    }
}

impl From<std::io::Error> for CompanionError {
    fn from(err: std::io::Error) -> Self {
        CompanionError::Encoding(err.to_string())
    }
}
