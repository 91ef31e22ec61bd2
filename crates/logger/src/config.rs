// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Logger configuration
//!
//! Every field of [`LoggerConfig`] is optional. Unset values fall back to the
//! defaults documented on each field, so building a logger never fails.
//! The struct deserializes from JSON or YAML (everything except the output
//! sink), which lets services keep their logging settings next to the rest of
//! their configuration.

use std::{
    fmt,
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use serde::{Deserialize, Deserializer, Serialize};

use crate::level::Level;

/// Name of the JSON output format
pub const FORMAT_JSON: &str = "json";
/// Name of the human-readable console format
pub const FORMAT_CONSOLE: &str = "console";
/// Name of the console format with RFC 3339 timestamps
pub const FORMAT_PRETTY: &str = "pretty";

/// Default field name for the trace identifier
pub const DEFAULT_TRACE_ID_FIELD: &str = "trace_id";
/// Default field name for the span identifier
pub const DEFAULT_SPAN_ID_FIELD: &str = "span_id";

/// Output encoding of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON object per line
    #[default]
    Json,
    /// `3:04PM INF message key=value`
    Console,
    /// Console layout with an RFC 3339 timestamp
    Pretty,
}

impl Format {
    /// Map a format name to a [`Format`]
    ///
    /// Matching ignores case. Empty or unrecognised names select
    /// [`Format::Json`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            FORMAT_CONSOLE => Format::Console,
            FORMAT_PRETTY => Format::Pretty,
            _ => Format::Json,
        }
    }

    /// Canonical name of this format
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => FORMAT_JSON,
            Format::Console => FORMAT_CONSOLE,
            Format::Pretty => FORMAT_PRETTY,
        }
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.as_deref().map_or(Format::Json, Format::from_name))
    }
}

/// Shared destination for rendered log lines
///
/// Cloning an `Output` shares the underlying writer; every line is written
/// while holding its lock so lines from concurrent callers never interleave.
#[derive(Clone)]
pub struct Output {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    kind: &'static str,
}

impl Output {
    /// Write to the process's standard error
    pub fn stderr() -> Self {
        Self::with_kind(io::stderr(), "stderr")
    }

    /// Write to the process's standard output
    pub fn stdout() -> Self {
        Self::with_kind(io::stdout(), "stdout")
    }

    /// Write to an arbitrary writer
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_kind(writer, "writer")
    }

    /// Write to an in-memory buffer, returning the buffer for inspection
    pub fn buffer() -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (Self::with_kind(buffer.clone(), "buffer"), buffer)
    }

    fn with_kind<W>(writer: W, kind: &'static str) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            kind,
        }
    }

    /// Write one rendered line. Sink failures are dropped.
    pub(crate) fn write_line(&self, line: &[u8]) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(line);
        let _ = writer.flush();
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// In-memory log sink, handy for tests and for capturing output
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Non-empty lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Configuration for [`Logger`](crate::Logger)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output destination (default: standard error)
    #[serde(skip)]
    pub output: Option<Output>,
    /// Minimum level that is written (default: [`Level::Info`])
    pub level: Option<Level>,
    /// Output format (default: [`Format::Json`])
    pub format: Format,
    /// Value of the `service` field attached to every line
    pub service_name: Option<String>,
    /// Value of the `env` field attached to every line
    pub environment: Option<String>,
    /// Field name for the trace identifier (default: `trace_id`)
    pub trace_id_field_name: Option<String>,
    /// Field name for the span identifier (default: `span_id`)
    pub span_id_field_name: Option<String>,
    /// Indent JSON output instead of writing one object per line
    pub pretty_print: bool,
    /// Disable ANSI colours in the console formats
    pub no_color: bool,
}

impl LoggerConfig {
    /// Create a configuration with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output destination
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the minimum level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Set the service name
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    /// Set the deployment environment
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the trace identifier field name
    pub fn with_trace_id_field_name(mut self, name: impl Into<String>) -> Self {
        self.trace_id_field_name = Some(name.into());
        self
    }

    /// Set the span identifier field name
    pub fn with_span_id_field_name(mut self, name: impl Into<String>) -> Self {
        self.span_id_field_name = Some(name.into());
        self
    }

    /// Toggle indented JSON output
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    /// Toggle ANSI colours in console output
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}

/// Treat empty strings the same as unset values
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
