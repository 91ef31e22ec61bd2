// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading

use thiserror::Error;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigLoadError>;

/// Errors returned while loading a configuration file
///
/// Each message names the stage that failed.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The file is not valid JSON for the target type
    #[error("failed to parse JSON config: {0}")]
    Json(#[source] serde_json::Error),

    /// The file is not valid YAML for the target type
    #[error("failed to parse YAML config: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// The file extension is not one of the supported formats
    #[error("unsupported file format: {0} (supported: .json, .yaml, .yml)")]
    UnsupportedFormat(String),

    /// Merging the file with environment overrides failed
    #[error("failed to load layered config: {0}")]
    Layered(#[from] config::ConfigError),
}
