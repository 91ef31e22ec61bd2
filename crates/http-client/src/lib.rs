// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Thin HTTP client for calling other services
//!
//! [`HttpClient`] joins a base URL with each endpoint, applies default
//! headers and a timeout (10 seconds unless configured), encodes JSON bodies
//! and turns every response with status 400 or above into
//! [`HttpClientError::Status`] carrying the remote body.
//!
//! ```no_run
//! use http_client::{HttpClient, HttpClientOptions, RequestBody};
//! use serde_json::json;
//!
//! # async fn run() -> http_client::HttpClientResult<()> {
//! let client = HttpClient::new(
//!     "https://api.example.com",
//!     HttpClientOptions::default().with_header("Authorization", "Bearer token"),
//! )?;
//!
//! client.post("/items", json!({"name": "widget"})).await?;
//! client.put_json("/items/1", &vec!["a", "b"]).await?;
//! client.put_raw("/notes/1", "plain text", "text/plain").await?;
//! let items: Vec<String> = client.get_json("/items").await?;
//! client.delete("/items/1", RequestBody::Empty).await?;
//! # Ok(())
//! # }
//! ```

mod body;
mod client;
mod error;

pub use crate::{
    body::RequestBody,
    client::{DEFAULT_TIMEOUT, HttpClient, HttpClientOptions},
    error::{HttpClientError, HttpClientResult},
};
