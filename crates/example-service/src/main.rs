// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Example service binary
//!
//! Usage: `example-service [CONFIG_PATH]`

use anyhow::{Context, Result};
use example_service::{AppState, DEFAULT_CONFIG_PATH, ServiceConfig, create_routes};
use grace::GracefulServer;
use logger::Logger;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = ServiceConfig::load(&path)
        .with_context(|| format!("failed to load configuration from {path}"))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    logger::set_global(Logger::with_config(config.logger.clone()));

    let service_name = config
        .logger
        .service_name
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let router = create_routes(AppState::new(&service_name, config.item_count));

    let server = match &config.tls {
        Some(tls) => GracefulServer::https(
            config.listen_addr.as_str(),
            &tls.cert_path,
            &tls.key_path,
            router,
        ),
        None => GracefulServer::http(config.listen_addr.as_str(), router),
    }
    .with_shutdown_timeout(config.shutdown_timeout());

    info!(address = %config.listen_addr, tls = config.tls.is_some(), "Starting {service_name}");
    logger::info()
        .str("address", config.listen_addr.as_str())
        .u64("items", config.item_count)
        .msg("service starting");

    grace::serve_server(server).await?;
    logger::info().msg("service stopped");
    Ok(())
}
