// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Leveled structured logging
//!
//! A small logger that writes one line per event as JSON or in a
//! human-readable console layout. Events are built with chainable typed
//! setters and finished with [`Event::msg`] or [`Event::send`]:
//!
//! ```
//! use logger::{Level, Logger, LoggerConfig, Output};
//!
//! let (output, buffer) = Output::buffer();
//! let log = Logger::with_config(
//!     LoggerConfig::new()
//!         .with_output(output)
//!         .with_level(Level::Debug)
//!         .with_service_name("billing"),
//! );
//!
//! log.info().str("invoice", "INV-7").i64("lines", 3).msg("invoice issued");
//! assert!(buffer.contents().contains("\"invoice\":\"INV-7\""));
//! ```
//!
//! Loggers pick up trace correlation from an OpenTelemetry [`Context`]
//! through [`Logger::with_context`], and a process-wide default instance is
//! available through [`global`] and the free functions of this crate.
//!
//! [`Context`]: opentelemetry::Context

mod config;
mod event;
mod fields;
mod format;
mod global;
mod instance;
mod level;

pub use crate::{
    config::{
        DEFAULT_SPAN_ID_FIELD, DEFAULT_TRACE_ID_FIELD, FORMAT_CONSOLE, FORMAT_JSON, FORMAT_PRETTY,
        Format, LogBuffer, LoggerConfig, Output,
    },
    event::Event,
    global::{
        debug, error, fatal, global, info, panic, set_global, set_global_level, set_level, trace,
        warn, with_context,
    },
    instance::{ChildBuilder, Logger},
    level::{Level, ParseLevelError},
};
