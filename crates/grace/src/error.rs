// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for graceful shutdown

use std::time::Duration;

use thiserror::Error;

/// Result type alias for serving operations
pub type GraceResult<T> = Result<T, GraceError>;

/// Errors returned once the server has stopped
#[derive(Debug, Error)]
pub enum GraceError {
    /// In-flight requests did not finish before the deadline
    #[error("server did not shut down within {}s", .0.as_secs_f64())]
    ShutdownTimeout(Duration),

    /// The listener task panicked or was cancelled
    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
