//! Error types for remote API access.

use thiserror::Error;

/// Failure modes of a remote fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request URL could not be parsed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response (connect failure, timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("unexpected HTTP status {code}")]
    Status { code: u16 },

    /// The response body did not decode as the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),
}
