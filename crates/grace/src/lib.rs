// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Graceful shutdown for axum servers
//!
//! [`serve_http`] and [`serve_https`] run a router until the process receives
//! SIGINT or SIGTERM (Ctrl-C off Unix), then stop accepting connections and
//! give in-flight requests up to 30 seconds to finish.
//!
//! ```no_run
//! use axum::{Router, routing::get};
//!
//! # async fn run() -> grace::GraceResult<()> {
//! let app = Router::new().route("/health", get(|| async { "ok" }));
//! grace::serve_http("0.0.0.0:8080", app).await
//! # }
//! ```
//!
//! [`GracefulServer`] exposes the deadline and a cancellation token for
//! programmatic shutdown.

mod error;
mod server;
mod signal;

pub use crate::{
    error::{GraceError, GraceResult},
    server::{DEFAULT_SHUTDOWN_TIMEOUT, GracefulServer, serve_http, serve_https, serve_server},
};
