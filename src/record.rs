// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Log record and severity levels.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use crate::Error;
use crate::ErrorKind;
use crate::kv::Fields;

/// The severity of a log record, ordered from the least to the most severe.
///
/// ```
/// use logfacade::Level;
///
/// assert!(Level::Debug < Level::Info);
/// assert!(Level::Error < Level::Fatal);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates verbose information for debugging.
    Debug,
    /// Designates useful information. The default threshold.
    Info,
    /// Designates possible issues.
    Warn,
    /// Designates errors.
    Error,
    /// Designates unrecoverable errors. The process exits after logging.
    Fatal,
}

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("debug", Level::Debug),
            ("info", Level::Info),
            ("warn", Level::Warn),
            ("error", Level::Error),
            ("fatal", Level::Fatal),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(Error::new(
            ErrorKind::ConfigInvalid,
            format!("malformed level: {s:?}"),
        ))
    }
}

/// The payload of a log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    level: Level,
    name: Option<&'a str>,

    // the payload
    payload: Cow<'a, str>,

    // structural logging
    fields: &'a Fields,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The hierarchical name of the logger that emitted the message, if any.
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// The message body.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The structured fields carried by the emitting logger.
    pub fn fields(&self) -> &'a Fields {
        self.fields
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                level: Level::Info,
                name: None,
                payload: Cow::Borrowed(""),
                fields: Fields::empty(),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time). Default to the time the builder is created.
    pub fn time(mut self, now: SystemTime) -> Self {
        self.record.now = now;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`name`](Record::name).
    pub fn name(mut self, name: Option<&'a str>) -> Self {
        self.record.name = name;
        self
    }

    /// Set [`payload`](Record::payload).
    pub fn payload(mut self, payload: impl Into<Cow<'a, str>>) -> Self {
        self.record.payload = payload.into();
        self
    }

    /// Set the payload from preformatted arguments, avoiding an allocation for plain literals.
    pub fn args(self, args: fmt::Arguments<'a>) -> Self {
        match args.as_str() {
            Some(s) => self.payload(s),
            None => self.payload(args.to_string()),
        }
    }

    /// Set [`fields`](Record::fields).
    pub fn fields(mut self, fields: &'a Fields) -> Self {
        self.record.fields = fields;
        self
    }

    /// Invoke the builder and return a `Record`
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
