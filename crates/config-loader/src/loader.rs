// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! File loading by extension

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ConfigLoadError, ConfigResult};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl FileFormat {
    /// Pick the format from a path's extension, ignoring case
    ///
    /// The error names the extension including its leading dot, or is empty
    /// when the path has none.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "" => Err(ConfigLoadError::UnsupportedFormat(String::new())),
            other => Err(ConfigLoadError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// Load a configuration file, choosing the decoder from its extension
///
/// `.json` files are decoded as JSON and `.yaml`/`.yml` files as YAML. Any
/// other extension fails with [`ConfigLoadError::UnsupportedFormat`] without
/// touching the file.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Json => load_json(path),
        FileFormat::Yaml => load_yaml(path),
    }
}

/// Load a JSON configuration file regardless of its extension
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let content = read(path.as_ref())?;
    serde_json::from_str(&content).map_err(ConfigLoadError::Json)
}

/// Load a YAML configuration file regardless of its extension
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let content = read(path.as_ref())?;
    serde_yaml::from_str(&content).map_err(ConfigLoadError::Yaml)
}

fn read(path: &Path) -> ConfigResult<String> {
    debug!("Loading configuration from: {}", path.display());
    fs::read_to_string(path).map_err(ConfigLoadError::Read)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_ignores_case() {
        for name in ["app.json", "APP.JSON", "dir/app.Json"] {
            assert_eq!(FileFormat::from_path(Path::new(name)).unwrap(), FileFormat::Json);
        }
        for name in ["app.yaml", "app.yml", "APP.YML"] {
            assert_eq!(FileFormat::from_path(Path::new(name)).unwrap(), FileFormat::Yaml);
        }
    }

    #[test]
    fn unsupported_extensions_are_named() {
        let err = FileFormat::from_path(Path::new("app.TOML")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported file format: .toml (supported: .json, .yaml, .yml)"
        );

        let err = FileFormat::from_path(Path::new("Makefile")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported file format:  (supported: .json, .yaml, .yml)"
        );
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let err = load::<serde_json::Value>("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedFormat(ext) if ext == ".ini"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_json::<serde_json::Value>("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Read(_)));
        assert!(err.to_string().starts_with("failed to read config file: "));
    }
}
