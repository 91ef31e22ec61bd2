// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Logger instances and child loggers

use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use opentelemetry::{Context, trace::TraceContextExt};
use serde_json::{Map, Value};

use crate::{
    config::{
        DEFAULT_SPAN_ID_FIELD, DEFAULT_TRACE_ID_FIELD, Format, LoggerConfig, Output, non_empty,
    },
    event::Event,
    fields::field_setters,
    format::{Record, Style, render},
    level::Level,
};

/// Settings shared by a logger and every child derived from it
#[derive(Debug)]
struct Sink {
    output: Output,
    style: Style,
    trace_id_key: String,
    span_id_key: String,
}

/// Leveled structured logger
///
/// A `Logger` is a cheap handle: cloning it yields the same instance, so the
/// clone observes [`set_level`](Logger::set_level) calls made through the
/// original. Deriving a child with [`with`](Logger::with) or
/// [`with_context`](Logger::with_context) produces a new instance that
/// carries extra fields and a snapshot of the parent's level; the parent is
/// never modified.
#[derive(Debug, Clone)]
pub struct Logger {
    sink: Arc<Sink>,
    context: Arc<Map<String, Value>>,
    level: Arc<RwLock<Level>>,
}

impl Logger {
    /// Create a logger with the default configuration
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Create a logger from a configuration, defaulting every unset field
    pub fn with_config(config: LoggerConfig) -> Self {
        let mut context = Map::new();
        if let Some(service) = non_empty(config.service_name.as_ref()) {
            context.insert("service".to_string(), Value::String(service.to_string()));
        }
        if let Some(environment) = non_empty(config.environment.as_ref()) {
            context.insert("env".to_string(), Value::String(environment.to_string()));
        }

        let sink = Sink {
            output: config.output.unwrap_or_default(),
            style: Style {
                format: config.format,
                pretty_print: config.pretty_print,
                color: !config.no_color,
            },
            trace_id_key: non_empty(config.trace_id_field_name.as_ref())
                .unwrap_or(DEFAULT_TRACE_ID_FIELD)
                .to_string(),
            span_id_key: non_empty(config.span_id_field_name.as_ref())
                .unwrap_or(DEFAULT_SPAN_ID_FIELD)
                .to_string(),
        };

        Self {
            sink: Arc::new(sink),
            context: Arc::new(context),
            level: Arc::new(RwLock::new(config.level.unwrap_or_default())),
        }
    }

    /// Current minimum level
    pub fn level(&self) -> Level {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change the minimum level of this instance
    ///
    /// Only this logger and its clones are affected. Children derived earlier
    /// keep the level they were created with.
    pub fn set_level(&self, level: Level) {
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    /// Whether an event at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        let current = self.level();
        current != Level::Disabled && level != Level::Disabled && level >= current
    }

    /// Output format of this logger
    pub fn format(&self) -> Format {
        self.sink.style.format
    }

    /// Field name used for trace identifiers
    pub fn trace_id_field_name(&self) -> &str {
        &self.sink.trace_id_key
    }

    /// Field name used for span identifiers
    pub fn span_id_field_name(&self) -> &str {
        &self.sink.span_id_key
    }

    /// Fields attached to every line written by this logger
    pub fn context_fields(&self) -> &Map<String, Value> {
        &self.context
    }

    /// Start an event at the given level
    pub fn log(&self, level: Level) -> Event {
        let logger = self.enabled(level).then(|| self.clone());
        Event::new(logger, level)
    }

    /// Start a trace-level event
    pub fn trace(&self) -> Event {
        self.log(Level::Trace)
    }

    /// Start a debug-level event
    pub fn debug(&self) -> Event {
        self.log(Level::Debug)
    }

    /// Start an info-level event
    pub fn info(&self) -> Event {
        self.log(Level::Info)
    }

    /// Start a warn-level event
    pub fn warn(&self) -> Event {
        self.log(Level::Warn)
    }

    /// Start an error-level event
    pub fn error(&self) -> Event {
        self.log(Level::Error)
    }

    /// Start a fatal event; finishing it exits the process
    pub fn fatal(&self) -> Event {
        self.log(Level::Fatal)
    }

    /// Start a panic event; finishing it panics
    pub fn panic(&self) -> Event {
        self.log(Level::Panic)
    }

    /// Start building a child logger with extra fields
    pub fn with(&self) -> ChildBuilder {
        ChildBuilder {
            parent: self.clone(),
            fields: Map::new(),
        }
    }

    /// Attach the trace and span identifiers of the context's active span
    ///
    /// When the context carries no valid span the receiver is returned as is
    /// (a clone of the same instance). Otherwise a new child logger is
    /// returned with both identifiers attached as lower-case hex under the
    /// configured field names.
    pub fn with_context(&self, cx: &Context) -> Logger {
        let span = cx.span();
        let span_context = span.span_context();
        if !span_context.is_valid() {
            return self.clone();
        }

        let mut fields = Map::with_capacity(2);
        fields.insert(
            self.sink.trace_id_key.clone(),
            Value::String(span_context.trace_id().to_string()),
        );
        fields.insert(
            self.sink.span_id_key.clone(),
            Value::String(span_context.span_id().to_string()),
        );
        self.child(fields)
    }

    /// Whether two handles refer to the same logger instance
    pub fn same_instance(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.context, &other.context) && Arc::ptr_eq(&self.level, &other.level)
    }

    fn child(&self, fields: Map<String, Value>) -> Logger {
        let mut context = (*self.context).clone();
        context.extend(fields);
        Logger {
            sink: Arc::clone(&self.sink),
            context: Arc::new(context),
            level: Arc::new(RwLock::new(self.level())),
        }
    }

    pub(crate) fn write(&self, level: Level, fields: &Map<String, Value>, message: Option<&str>) {
        let record = Record {
            level,
            time: Utc::now(),
            context: &self.context,
            fields,
            message,
        };
        self.sink.output.write_line(&render(self.sink.style, &record));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a child logger carrying extra fields
///
/// Created by [`Logger::with`] and finished with [`ChildBuilder::logger`].
#[derive(Debug)]
#[must_use = "call `logger()` to obtain the child logger"]
pub struct ChildBuilder {
    parent: Logger,
    fields: Map<String, Value>,
}

impl ChildBuilder {
    fn accepts_fields(&self) -> bool {
        true
    }

    fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    field_setters!();

    /// Finish the child logger
    pub fn logger(self) -> Logger {
        self.parent.child(self.fields)
    }
}
