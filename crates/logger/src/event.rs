// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Chainable log event builder

use serde_json::{Map, Value};

use crate::{fields::field_setters, instance::Logger, level::Level};

/// A log event under construction
///
/// Obtained from the per-level methods on [`Logger`]. Nothing is written
/// until [`Event::msg`] or [`Event::send`] is called. Events below the
/// logger's level are disabled: setters skip serialization and finishing
/// writes nothing.
///
/// Finishing a [`Level::Fatal`] event exits the process with status 1, and
/// finishing a [`Level::Panic`] event panics with the message. Both happen
/// even when the event itself was filtered out.
#[derive(Debug)]
#[must_use = "an event is only written once `msg` or `send` is called"]
pub struct Event {
    logger: Option<Logger>,
    level: Level,
    fields: Map<String, Value>,
}

impl Event {
    pub(crate) fn new(logger: Option<Logger>, level: Level) -> Self {
        Self {
            logger,
            level,
            fields: Map::new(),
        }
    }

    /// Level this event was created at
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether this event will be written
    pub fn enabled(&self) -> bool {
        self.logger.is_some()
    }

    fn accepts_fields(&self) -> bool {
        self.logger.is_some()
    }

    fn field(mut self, key: &str, value: Value) -> Self {
        if self.accepts_fields() {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    field_setters!();

    /// Write the event with a message
    pub fn msg(self, message: impl AsRef<str>) {
        self.finish(Some(message.as_ref()));
    }

    /// Write the event without a message
    pub fn send(self) {
        self.finish(None);
    }

    #[allow(clippy::panic)]
    fn finish(self, message: Option<&str>) {
        if let Some(logger) = &self.logger {
            logger.write(self.level, &self.fields, message);
        }

        match self.level {
            Level::Fatal => std::process::exit(1),
            Level::Panic => panic!("{}", message.unwrap_or_default()),
            _ => {}
        }
    }
}
