// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for building responses

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Result type alias for response builders
pub type ResponseResult<T = Response> = Result<T, ResponseError>;

/// Errors returned while building a response
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The payload could not be encoded as JSON
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        error!(error = %self, "Response encoding failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"code":500,"error":"failed to encode response"}"#,
        )
            .into_response()
    }
}
