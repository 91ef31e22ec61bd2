// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Handler error that renders as an error envelope

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::respond;

/// Error returned from a handler, rendered as `{"code", "error"}`
///
/// ```
/// use axum::response::Response;
/// use response::ApiError;
///
/// async fn show(id: u64) -> Result<Response, ApiError> {
///     if id == 0 {
///         return Err(ApiError::bad_request("id must be positive"));
///     }
///     Err(ApiError::not_found(format!("item {id} not found")))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: Option<String>,
}

impl ApiError {
    /// Error with an arbitrary status and message
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }

    /// Error with a status and no message
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
        }
    }

    /// `400 Bad Request`
    pub fn bad_request(err: impl fmt::Display) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.to_string())
    }

    /// `401 Unauthorized`
    pub fn unauthorized(err: impl fmt::Display) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, err.to_string())
    }

    /// `403 Forbidden`
    pub fn forbidden(err: impl fmt::Display) -> Self {
        Self::new(StatusCode::FORBIDDEN, err.to_string())
    }

    /// `404 Not Found`
    pub fn not_found(err: impl fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, err.to_string())
    }

    /// `500 Internal Server Error`
    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }

    /// HTTP status of the response
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Message written to the `error` field
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.status),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!(status = %self.status, message = ?self.message, "Handler failed");
        }
        respond::error(self.status, self.message).into_response()
    }
}
