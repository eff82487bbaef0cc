//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when talking to the puzzle site
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx HTTP status; carries the response body for diagnosis
    #[error("Bad server response ({status}): {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// The response page had no article element to classify
    #[error("Failed to parse server response: {0}")]
    UnrecognizedResponse(String),

    /// The article message matched no known verdict prefix
    #[error("Failed to parse server message: {0}")]
    UnrecognizedMessage(String),

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    Init(String),
}
