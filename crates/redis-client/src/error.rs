// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Redis operations

use std::time::Duration;

use thiserror::Error;

/// Result type alias for Redis operations
pub type KvResult<T> = Result<T, KvError>;

/// Errors returned by [`RedisClient`](crate::RedisClient)
#[derive(Debug, Error)]
pub enum KvError {
    /// The key (or hash field, or list element) does not exist
    #[error("key not found")]
    KeyNotFound,

    /// Error reported by the Redis driver or server
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The operation did not complete in time
    #[error("redis operation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// A value could not be encoded to or decoded from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The connection pool could not hand out a connection
    #[error("redis pool error: {0}")]
    Pool(String),

    /// The client options are invalid
    #[error("invalid redis configuration: {0}")]
    Config(String),
}

impl KvError {
    /// Whether this error is the missing-key sentinel
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, KvError::KeyNotFound)
    }
}
