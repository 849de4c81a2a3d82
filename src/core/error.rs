use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DeckError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be parsed as JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server rejected the request due to rate limiting (HTTP 403/429).
    #[error("Rate limited at {url}")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned a 5xx status code.
    #[error("Server error {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream returned a payload with no usable content (e.g. a proxy
    /// envelope whose `contents` field is missing or empty).
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// The data received was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl DeckError {
    /// Map a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(status: u16, url: &url::Url) -> Self {
        let url = url.to_string();
        match status {
            403 | 429 => Self::RateLimited { url },
            500..=599 => Self::ServerError { status, url },
            _ => Self::Status { status, url },
        }
    }
}
