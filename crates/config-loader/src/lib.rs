// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed configuration loading
//!
//! Decodes JSON or YAML files into any [`serde::de::DeserializeOwned`] type.
//! Either the whole target is produced or an error naming the failing stage
//! is returned.
//!
//! ```no_run
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Settings {
//!     app_name: String,
//!     port: u16,
//! }
//!
//! # fn main() -> config_loader::ConfigResult<()> {
//! let settings: Settings = config_loader::load("config/app.yaml")?;
//! let overridden: Settings = config_loader::load_layered("config/app.yaml", "APP")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod layered;
mod loader;

pub use crate::{
    error::{ConfigLoadError, ConfigResult},
    layered::load_layered,
    loader::{FileFormat, load, load_json, load_yaml},
};
