//! Errors reported by a Pokémon data source.

use thiserror::Error;

/// Failure kinds a data source can report.
///
/// The browser treats every variant the same way ("load failed") and only
/// forwards the rendered message; the distinction matters to logging and to
/// callers that talk to the data source directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered successfully but sent no body.
    #[error("No data received")]
    NoData,

    /// The body was not the expected JSON document.
    #[error("Failed to decode response: {0}")]
    DecodingError(String),

    /// The server answered with a non-success status.
    #[error("Server error: {0}")]
    ServerError(String),

    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result alias for data source calls.
pub type DataSourceResult<T> = Result<T, DataSourceError>;

impl DataSourceError {
    /// Build a `ServerError` from an HTTP status and body excerpt.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            DataSourceError::ServerError(format!("HTTP {}", status))
        } else {
            DataSourceError::ServerError(format!("HTTP {}: {}", status, truncate(body, 200)))
        }
    }

    /// Whether repeating the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataSourceError::NetworkError(_) => true,
            DataSourceError::ServerError(message) => {
                message.starts_with("HTTP 5") || message.starts_with("HTTP 429")
            }
            DataSourceError::InvalidUrl(_)
            | DataSourceError::NoData
            | DataSourceError::DecodingError(_) => false,
        }
    }

    /// Whether the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataSourceError::ServerError(message) if message.starts_with("HTTP 404"))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DataSourceError::InvalidUrl(_) => {
                "The Pokédex server address is invalid. Please check your configuration.".to_string()
            }
            DataSourceError::NoData => "The server returned an empty response.".to_string(),
            DataSourceError::DecodingError(_) => {
                "Received an unexpected response from the server.".to_string()
            }
            DataSourceError::ServerError(_) if self.is_not_found() => {
                "That Pokémon could not be found.".to_string()
            }
            DataSourceError::ServerError(_) => {
                "The server is experiencing issues. Please try again later.".to_string()
            }
            DataSourceError::NetworkError(_) => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DataSourceError::InvalidUrl(_) => "E_DS_URL",
            DataSourceError::NoData => "E_DS_NODATA",
            DataSourceError::DecodingError(_) => "E_DS_DECODE",
            DataSourceError::ServerError(_) => "E_DS_SERVER",
            DataSourceError::NetworkError(_) => "E_DS_NETWORK",
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
