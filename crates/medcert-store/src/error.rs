//! Hosted-store client error types.

/// Errors from hosted-store fetches.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint path that was being fetched.
        endpoint: String,
        /// The underlying transport failure.
        source: reqwest::Error,
    },

    /// The hosted service returned a non-2xx status.
    #[error("store endpoint {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint path that was being fetched.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The endpoint path that was being fetched.
        endpoint: String,
        /// The underlying decode failure.
        source: reqwest::Error,
    },

    /// Client configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
