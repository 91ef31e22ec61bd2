// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! File configuration with environment overrides

use std::path::Path;

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{error::ConfigResult, loader::FileFormat};

/// Load a configuration file and overlay prefixed environment variables
///
/// Variables named `<PREFIX>_<KEY>` override top-level keys; nested keys are
/// separated by a double underscore, so `APP_DATABASE__HOST` sets
/// `database.host`. Values are parsed as numbers or booleans where possible.
pub fn load_layered<T: DeserializeOwned>(
    path: impl AsRef<Path>,
    env_prefix: &str,
) -> ConfigResult<T> {
    layered(path.as_ref(), environment(env_prefix))
}

fn environment(prefix: &str) -> Environment {
    Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn layered<T: DeserializeOwned>(path: &Path, env: Environment) -> ConfigResult<T> {
    let format = match FileFormat::from_path(path)? {
        FileFormat::Json => config::FileFormat::Json,
        FileFormat::Yaml => config::FileFormat::Yaml,
    };
    debug!("Loading layered configuration from: {}", path.display());

    let config = Config::builder()
        .add_source(File::from(path).format(format))
        .add_source(env)
        .build()?;
    Ok(config.try_deserialize()?)
}
