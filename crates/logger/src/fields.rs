// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed field setters shared by events and child-logger builders
//!
//! Both [`Event`](crate::Event) and [`ChildBuilder`](crate::ChildBuilder)
//! expose the same chainable setters. Each type provides private
//! `field(self, key, value) -> Self` and `accepts_fields(&self) -> bool`
//! methods; the macro below generates the public API on top of them.

macro_rules! field_setters {
    () => {
        /// Add a string field
        pub fn str(self, key: &str, value: impl Into<String>) -> Self {
            self.field(key, serde_json::Value::String(value.into()))
        }

        /// Add a list of strings
        pub fn strs<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
            let values = values
                .iter()
                .map(|v| serde_json::Value::String(v.as_ref().to_string()))
                .collect();
            self.field(key, serde_json::Value::Array(values))
        }

        /// Add a signed 64-bit integer field
        pub fn i64(self, key: &str, value: i64) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add a signed 32-bit integer field
        pub fn i32(self, key: &str, value: i32) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add an unsigned 64-bit integer field
        pub fn u64(self, key: &str, value: u64) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add an unsigned 32-bit integer field
        pub fn u32(self, key: &str, value: u32) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add a 64-bit float field. Non-finite values are written as `null`.
        pub fn f64(self, key: &str, value: f64) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add a 32-bit float field. Non-finite values are written as `null`.
        pub fn f32(self, key: &str, value: f32) -> Self {
            self.field(key, serde_json::Value::from(value))
        }

        /// Add a boolean field
        pub fn bool(self, key: &str, value: bool) -> Self {
            self.field(key, serde_json::Value::Bool(value))
        }

        /// Add a duration field, written as fractional milliseconds
        pub fn duration(self, key: &str, value: std::time::Duration) -> Self {
            self.field(key, serde_json::Value::from(value.as_secs_f64() * 1000.0))
        }

        /// Add the error's message under the `error` key
        pub fn err(self, error: &(dyn std::error::Error + 'static)) -> Self {
            self.field("error", serde_json::Value::String(error.to_string()))
        }

        /// Add any serializable value
        ///
        /// A value that fails to serialize is recorded as its error message.
        pub fn any<T>(self, key: &str, value: &T) -> Self
        where
            T: serde::Serialize + ?Sized,
        {
            if !self.accepts_fields() {
                return self;
            }
            let value = serde_json::to_value(value)
                .unwrap_or_else(|e| serde_json::Value::String(e.to_string()));
            self.field(key, value)
        }

        /// Add every entry of a JSON object
        pub fn fields(self, fields: serde_json::Map<String, serde_json::Value>) -> Self {
            fields
                .into_iter()
                .fold(self, |acc, (key, value)| acc.field(&key, value))
        }
    };
}

pub(crate) use field_setters;
