// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Uniform JSON envelope for HTTP handlers
//!
//! Every response body has the shape `{"code": <status>, "data": <any>,
//! "error": <message>}` where `code` mirrors the HTTP status and absent
//! fields are left out:
//!
//! ```
//! use axum::http::StatusCode;
//! use serde_json::json;
//!
//! let ok = response::success(json!({"id": 7})).unwrap();
//! assert_eq!(ok.status(), StatusCode::OK);
//!
//! let missing = response::not_found("item 7 not found").unwrap();
//! assert_eq!(missing.status(), StatusCode::NOT_FOUND);
//! ```
//!
//! Builders return [`ResponseResult`] so payload encoding failures reach the
//! caller. Both [`ResponseError`] and [`ApiError`] implement
//! [`IntoResponse`](axum::response::IntoResponse), so handlers can return
//! either directly.

mod api_error;
mod envelope;
mod error;
mod respond;

pub use crate::{
    api_error::ApiError,
    envelope::Envelope,
    error::{ResponseError, ResponseResult},
    respond::{
        bad_request, created, error, forbidden, internal_server_error, json, no_content,
        not_found, status_code, success, unauthorized,
    },
};
