// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Reference service
//!
//! A small catalog API that loads its settings with `config-loader`, logs
//! through the global `logger`, answers with `response` envelopes, pages
//! results with `pagination` and shuts down through `grace`.

mod config;
mod handlers;
mod routes;
mod state;

pub use crate::{
    config::{DEFAULT_CONFIG_PATH, ENV_PREFIX, ServiceConfig, TlsConfig},
    handlers::{ItemPage, MAX_PAGE_SIZE},
    routes::create_routes,
    state::{AppState, Item},
};
