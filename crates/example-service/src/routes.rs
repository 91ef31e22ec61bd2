// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Router assembly

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{get_item, health, list_items},
    state::AppState,
};

/// Every route of the service, with request tracing
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/items", get(list_items))
        .route("/items/{id}", get(get_item))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
