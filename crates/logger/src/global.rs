// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Process-wide default logger
//!
//! The global logger is created lazily on first use with the default
//! configuration. [`set_global`] swaps it atomically; callers that already
//! hold a handle from [`global`] keep using the logger they were given.

use std::sync::Arc;

use arc_swap::ArcSwap;
use lazy_static::lazy_static;
use opentelemetry::Context;

use crate::{event::Event, instance::Logger, level::Level};

lazy_static! {
    static ref GLOBAL: ArcSwap<Logger> = ArcSwap::from_pointee(Logger::new());
}

/// Handle to the current global logger
///
/// Repeated calls return the same instance until [`set_global`] replaces it.
pub fn global() -> Logger {
    Logger::clone(&GLOBAL.load())
}

/// Replace the global logger
pub fn set_global(logger: Logger) {
    GLOBAL.store(Arc::new(logger));
}

/// Change the level of the global logger
///
/// Equivalent to `global().set_level(level)`. Other logger instances are not
/// affected.
pub fn set_level(level: Level) {
    global().set_level(level);
}

/// Alias of [`set_level`]
pub fn set_global_level(level: Level) {
    set_level(level);
}

/// Derive a logger from the global one carrying the context's span identifiers
pub fn with_context(cx: &Context) -> Logger {
    global().with_context(cx)
}

/// Start a trace-level event on the global logger
pub fn trace() -> Event {
    global().trace()
}

/// Start a debug-level event on the global logger
pub fn debug() -> Event {
    global().debug()
}

/// Start an info-level event on the global logger
pub fn info() -> Event {
    global().info()
}

/// Start a warn-level event on the global logger
pub fn warn() -> Event {
    global().warn()
}

/// Start an error-level event on the global logger
pub fn error() -> Event {
    global().error()
}

/// Start a fatal event on the global logger
pub fn fatal() -> Event {
    global().fatal()
}

/// Start a panic event on the global logger
pub fn panic() -> Event {
    global().panic()
}
