// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wire shape of every JSON response

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"code": <status>, "data": <any>, "error": <message>}`
///
/// `code` mirrors the HTTP status. By convention only one of `data` and
/// `error` is present; absent fields are omitted from the encoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    /// HTTP status code
    pub code: u16,
    /// Payload of a successful response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message of a failed response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Envelope carrying a payload
    pub fn data(code: u16, data: T) -> Self {
        Self {
            code,
            data: Some(data),
            error: None,
        }
    }

    /// Envelope carrying an error message
    pub fn error(code: u16, error: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Envelope with only a status code
    pub fn empty(code: u16) -> Self {
        Self {
            code,
            data: None,
            error: None,
        }
    }
}
