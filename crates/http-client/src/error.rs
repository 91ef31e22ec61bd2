// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the HTTP client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for HTTP client operations
pub type HttpClientResult<T> = Result<T, HttpClientError>;

/// Errors returned by [`HttpClient`](crate::HttpClient)
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The remote answered with status 400 or above
    ///
    /// Displays as the raw response body.
    #[error("{body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// Base URL plus endpoint is not a valid URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A default header has an invalid name or value
    #[error("invalid header {0}")]
    Header(String),

    /// Request body could not be encoded as JSON
    #[error("failed to encode request body: {0}")]
    Json(#[from] serde_json::Error),

    /// No response within the configured timeout
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Transport or response decoding failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl HttpClientError {
    /// Status code of a [`Status`](Self::Status) error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
