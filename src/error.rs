use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request to the recipe API failed
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a payload we could not read
    #[error("Failed to parse recipe data: {0}")]
    ParseError(String),

    /// The search did not finish in time
    #[error("Search timed out after {0:?}")]
    Timeout(Duration),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Missing or invalid settings (API key, source name, ...)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error loading the configuration file or environment
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::ParseError(err.to_string())
    }
}

/// Errors reported by the voice input adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// No speech engine is available on this platform
    #[error("Speech recognition is not supported on this platform.")]
    Unsupported,

    /// The engine refused to start
    #[error("Error starting speech recognition.")]
    StartFailed(String),

    /// The engine reported an error while listening
    #[error("Error occurred in recognition: {0}")]
    Recognition(String),
}
