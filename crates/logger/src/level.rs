// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Log severity levels

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Severity of a log event, ordered from most to least verbose
///
/// A logger emits an event when the event's level is greater than or equal to
/// the logger's current level. [`Level::Disabled`] silences every event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fine-grained diagnostic output
    Trace,
    /// Debugging output
    Debug,
    /// Normal operational messages
    #[default]
    Info,
    /// Something unexpected that the service recovered from
    Warn,
    /// A failed operation
    Error,
    /// Unrecoverable failure; the process exits after the event is written
    Fatal,
    /// Unrecoverable failure; the thread panics after the event is written
    Panic,
    /// Nothing is written at this level
    Disabled,
}

/// Error returned when a string does not name a [`Level`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl Level {
    /// Every emitting level, most verbose first
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// Lower-case name used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
            Level::Disabled => "disabled",
        }
    }

    /// Three-letter code used by the console formats
    pub fn short_code(self) -> &'static str {
        match self {
            Level::Trace => "TRC",
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
            Level::Fatal => "FTL",
            Level::Panic => "PNC",
            Level::Disabled => "???",
        }
    }

    /// ANSI SGR parameters used to colour the level code
    pub(crate) fn ansi_color(self) -> &'static str {
        match self {
            Level::Trace => "35",
            Level::Debug => "33",
            Level::Info => "32",
            Level::Warn => "31",
            Level::Error | Level::Fatal | Level::Panic => "1;31",
            Level::Disabled => "0",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "panic" => Ok(Level::Panic),
            "disabled" | "off" => Ok(Level::Disabled),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error | Level::Fatal | Level::Panic => LevelFilter::ERROR,
            Level::Disabled => LevelFilter::OFF,
        }
    }
}
