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

//! Route records of the [`log`] crate through the active logger.

use crate::Error;
use crate::ErrorKind;
use crate::Fields;
use crate::Level;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

/// A [`log::Log`] implementation that forwards every record to the active logger.
///
/// `log` levels map onto the facade severities, with `Trace` folded into `Debug`. The record
/// target becomes the logger name and `log` key-values become fields.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct LogBridge {}

struct FieldsVisitor<'a> {
    fields: &'a mut Fields,
}

impl<'kvs> log::kv::VisitSource<'kvs> for FieldsVisitor<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let key = key.as_str();
        if let Some(v) = value.to_bool() {
            self.fields.insert(key, v);
        } else if let Some(v) = value.to_i64() {
            self.fields.insert(key, v);
        } else if let Some(v) = value.to_u64() {
            self.fields.insert(key, v);
        } else if let Some(v) = value.to_f64() {
            self.fields.insert(key, v);
        } else if let Some(v) = value.to_borrowed_str() {
            self.fields.insert(key, v);
        } else {
            self.fields.insert_display(key, &value);
        }
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        crate::logger().enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let mut logger = crate::logger();
        if !logger.enabled(record.level().into()) {
            return;
        }

        if !record.target().is_empty() {
            logger = logger.named(record.target());
        }

        let mut fields = Fields::new();
        let mut visitor = FieldsVisitor {
            fields: &mut fields,
        };
        // FieldsVisitor never fails
        let _ = record.key_values().visit(&mut visitor);
        if !fields.is_empty() {
            logger = logger.with_fields(fields);
        }

        let args = *record.args();
        match record.level() {
            log::Level::Error => logger.error(args),
            log::Level::Warn => logger.warn(args),
            log::Level::Info => logger.info(args),
            log::Level::Debug | log::Level::Trace => logger.debug(args),
        }
    }

    fn flush(&self) {
        crate::logger().flush();
    }
}

/// Install a [`LogBridge`] as the global [`log`] logger.
///
/// # Errors
///
/// Return an [`Unexpected`](ErrorKind::Unexpected) error if a `log` logger has already been set.
///
/// # Examples
///
/// ```
/// logfacade::bridge::setup_log_crate().unwrap();
/// log::info!("routed through logfacade");
/// ```
pub fn setup_log_crate() -> Result<(), Error> {
    static BRIDGE: LogBridge = LogBridge {};

    log::set_logger(&BRIDGE).map_err(|err| {
        Error::new(ErrorKind::Unexpected, "failed to set up log bridge").with_source(err)
    })?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
