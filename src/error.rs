//! The Cat API error types

use thiserror::Error;

/// All possible errors from the client
#[derive(Error, Debug)]
pub enum CatApiError {
    /// Parameters were rejected locally, before any request was made
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The request URL could not be built from the base URL and path
    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Multipart body could not be written
    #[error("Error encoding request body: {0}")]
    Encoding(#[from] std::io::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// The API answered with a status the client does not accept
    #[error("Unexpected status code: {status}")]
    Status { status: u16 },

    /// JSON deserialization error
    #[error("Error decoding response: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatApiError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        CatApiError::Validation {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for status errors
    pub fn status(&self) -> Option<u16> {
        match self {
            CatApiError::Status { status } => Some(*status),
            CatApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if parameters were rejected locally
    pub fn is_validation(&self) -> bool {
        matches!(self, CatApiError::Validation { .. })
    }

    /// Returns true if the request failed before any network activity:
    /// validation, URL construction or body encoding
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            CatApiError::Validation { .. }
                | CatApiError::InvalidUrl { .. }
                | CatApiError::Encoding(_)
        )
    }
}

/// Result type for The Cat API operations
pub type Result<T> = std::result::Result<T, CatApiError>;
