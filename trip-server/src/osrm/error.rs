//! Routing backend error types.

/// Errors from the external routing backend.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("routing API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Backend answered but found no route
    #[error("routing backend returned no routes (code {code}): {message}")]
    NoRoute { code: String, message: String },
}
