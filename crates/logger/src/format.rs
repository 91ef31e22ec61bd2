// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Line rendering for the supported output formats

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::{config::Format, level::Level};

pub(crate) const LEVEL_FIELD: &str = "level";
pub(crate) const TIME_FIELD: &str = "time";
pub(crate) const MESSAGE_FIELD: &str = "message";

/// A single event ready to be rendered
#[derive(Debug)]
pub(crate) struct Record<'a> {
    pub level: Level,
    pub time: DateTime<Utc>,
    pub context: &'a Map<String, Value>,
    pub fields: &'a Map<String, Value>,
    pub message: Option<&'a str>,
}

/// Rendering options fixed at logger construction
#[derive(Debug, Clone, Copy)]
pub(crate) struct Style {
    pub format: Format,
    pub pretty_print: bool,
    pub color: bool,
}

/// Render a record as a newline-terminated line
pub(crate) fn render(style: Style, record: &Record<'_>) -> Vec<u8> {
    match style.format {
        Format::Json => render_json(record, style.pretty_print),
        Format::Console => render_console(record, &console_time(record.time), style.color),
        Format::Pretty => render_console(
            record,
            &record.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            style.color,
        ),
    }
}

fn render_json(record: &Record<'_>, pretty_print: bool) -> Vec<u8> {
    let mut object = Map::with_capacity(record.context.len() + record.fields.len() + 3);
    object.insert(
        LEVEL_FIELD.to_string(),
        Value::String(record.level.as_str().to_string()),
    );
    object.insert(
        TIME_FIELD.to_string(),
        Value::String(record.time.to_rfc3339_opts(SecondsFormat::Secs, true)),
    );
    for (key, value) in record.context.iter().chain(record.fields) {
        object.insert(key.clone(), value.clone());
    }
    if let Some(message) = record.message {
        object.insert(
            MESSAGE_FIELD.to_string(),
            Value::String(message.to_string()),
        );
    }

    let value = Value::Object(object);
    let mut line = if pretty_print {
        serde_json::to_vec_pretty(&value)
    } else {
        serde_json::to_vec(&value)
    }
    .unwrap_or_default();
    line.push(b'\n');
    line
}

fn console_time(time: DateTime<Utc>) -> String {
    time.format("%-I:%M%p").to_string()
}

fn render_console(record: &Record<'_>, time: &str, color: bool) -> Vec<u8> {
    let mut line = String::with_capacity(96);

    paint(&mut line, time, "90", color);
    line.push(' ');
    paint(
        &mut line,
        record.level.short_code(),
        record.level.ansi_color(),
        color,
    );
    if let Some(message) = record.message.filter(|m| !m.is_empty()) {
        line.push(' ');
        line.push_str(message);
    }

    for (key, value) in record.context.iter().chain(record.fields) {
        line.push(' ');
        paint(&mut line, &format!("{key}="), "36", color);
        line.push_str(&console_value(value));
    }

    line.push('\n');
    line.into_bytes()
}

fn paint(line: &mut String, text: &str, sgr: &str, color: bool) {
    if color {
        let _ = write!(line, "\x1b[{sgr}m{text}\x1b[0m");
    } else {
        line.push_str(text);
    }
}

fn console_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() || s.contains(char::is_whitespace) => format!("{s:?}"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
