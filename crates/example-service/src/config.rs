// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Service configuration
//!
//! Read from a YAML or JSON file, then overridden by `SERVICE_*` environment
//! variables (`SERVICE_LISTEN_ADDR`, `SERVICE_LOGGER__LEVEL`, ...).

use std::{path::Path, time::Duration};

use config_loader::ConfigResult;
use logger::LoggerConfig;
use serde::Deserialize;

/// Prefix of environment variables that override file values
pub const ENV_PREFIX: &str = "SERVICE";

/// Configuration file used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config/service.yaml";

/// Certificate and key for serving HTTPS
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TlsConfig {
    /// PEM certificate chain
    pub cert_path: String,
    /// PEM private key
    pub key_path: String,
}

/// Top-level configuration of the example service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// `host:port`, or `:port` for every interface
    pub listen_addr: String,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Seconds in-flight requests get once shutdown starts
    pub shutdown_timeout_secs: u64,
    /// Number of items in the demo catalog
    pub item_count: u64,
    /// Serve HTTPS when present
    pub tls: Option<TlsConfig>,
    /// Structured logger settings
    pub logger: LoggerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: ":8080".to_string(),
            log_filter: "info".to_string(),
            shutdown_timeout_secs: 30,
            item_count: 45,
            tls: None,
            logger: LoggerConfig::new()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .with_environment("development"),
        }
    }
}

impl ServiceConfig {
    /// Load `path` with `SERVICE_*` environment overrides
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        config_loader::load_layered(path, ENV_PREFIX)
    }

    /// Shutdown deadline as a [`Duration`]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
