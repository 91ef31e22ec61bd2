// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request bodies

use serde::Serialize;
use serde_json::Value;

use crate::error::HttpClientResult;

/// Body attached to an outgoing request
///
/// Text and bytes are sent unchanged. JSON is encoded once, when the body is
/// built. [`Empty`](Self::Empty) sends no body and no `Content-Type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// UTF-8 text sent as is
    Text(String),
    /// Bytes sent as is
    Bytes(Vec<u8>),
    /// Encoded JSON document
    Json(Vec<u8>),
}

impl RequestBody {
    /// Encode any serializable value as a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> HttpClientResult<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }

    /// True for [`Empty`](Self::Empty)
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(text.into_bytes()),
            Self::Bytes(bytes) | Self::Json(bytes) => Some(bytes),
        }
    }
}

impl From<()> for RequestBody {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl<T: Into<RequestBody>> From<Option<T>> for RequestBody {
    fn from(body: Option<T>) -> Self {
        body.map_or(Self::Empty, Into::into)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for RequestBody {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        Self::Json(value.to_string().into_bytes())
    }
}

impl From<&Value> for RequestBody {
    fn from(value: &Value) -> Self {
        Self::Json(value.to_string().into_bytes())
    }
}
