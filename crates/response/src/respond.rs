// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response builders
//!
//! Every builder except [`no_content`] sets `Content-Type: application/json`
//! and writes an [`Envelope`] whose `code` equals the response status.

use std::fmt;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    envelope::Envelope,
    error::{ResponseError, ResponseResult},
};

const APPLICATION_JSON: &str = "application/json";

fn write(status: StatusCode, envelope: &Envelope) -> ResponseResult {
    let body = serde_json::to_vec(envelope)?;
    Ok((status, [(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}

/// Respond with `data` wrapped in an envelope
///
/// A payload that encodes to JSON `null` (such as `None` or `()`) is omitted
/// from the body.
pub fn json<T: Serialize>(status: StatusCode, data: T) -> ResponseResult {
    let data = serde_json::to_value(data).map_err(ResponseError::Encode)?;
    let envelope = Envelope {
        code: status.as_u16(),
        data: (!data.is_null()).then_some(data),
        error: None,
    };
    write(status, &envelope)
}

/// `200 OK` with a payload
pub fn success<T: Serialize>(data: T) -> ResponseResult {
    json(StatusCode::OK, data)
}

/// `201 Created` with a payload
pub fn created<T: Serialize>(data: T) -> ResponseResult {
    json(StatusCode::CREATED, data)
}

/// `204 No Content` with an empty body
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Respond with an error envelope
///
/// With `None` the `error` field is left out of the body.
pub fn error(status: StatusCode, err: Option<String>) -> ResponseResult {
    write(
        status,
        &Envelope {
            code: status.as_u16(),
            data: None::<Value>,
            error: err,
        },
    )
}

/// `400 Bad Request` carrying the error's message
pub fn bad_request(err: impl fmt::Display) -> ResponseResult {
    error(StatusCode::BAD_REQUEST, Some(err.to_string()))
}

/// `401 Unauthorized` carrying the error's message
pub fn unauthorized(err: impl fmt::Display) -> ResponseResult {
    error(StatusCode::UNAUTHORIZED, Some(err.to_string()))
}

/// `403 Forbidden` carrying the error's message
pub fn forbidden(err: impl fmt::Display) -> ResponseResult {
    error(StatusCode::FORBIDDEN, Some(err.to_string()))
}

/// `404 Not Found` carrying the error's message
pub fn not_found(err: impl fmt::Display) -> ResponseResult {
    error(StatusCode::NOT_FOUND, Some(err.to_string()))
}

/// `500 Internal Server Error` carrying the error's message
pub fn internal_server_error(err: impl fmt::Display) -> ResponseResult {
    error(StatusCode::INTERNAL_SERVER_ERROR, Some(err.to_string()))
}

/// Any status with a plain message in the `error` field
pub fn status_code(status: StatusCode, message: impl Into<String>) -> ResponseResult {
    error(status, Some(message.into()))
}
