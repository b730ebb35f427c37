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

use std::fmt;
use std::sync::Arc;

use crate::Append;
use crate::Level;
use crate::Trap;
use crate::kv::Fields;
use crate::logger::ConsoleBuilder;
use crate::logger::Logger;
use crate::logger::SharedLogger;
use crate::record::Record;

/// The console backend: a [`Logger`] that formats records above a threshold level and writes
/// them through an [`Append`].
///
/// Derived loggers share the sink and the threshold with their parent and only differ in the
/// name and fields they carry.
///
/// # Examples
///
/// ```
/// use logfacade::ConsoleLogger;
/// use logfacade::Level;
/// use logfacade::Logger;
///
/// let logger = ConsoleLogger::builder().level(Level::Warn).build();
/// assert!(!logger.enabled(Level::Info));
/// logger.named("startup").warn(format_args!("config file not found"));
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    core: Arc<Core>,
    name: Option<Arc<str>>,
    fields: Arc<Fields>,
}

#[derive(Debug)]
struct Core {
    level: Level,
    append: Box<dyn Append>,
    trap: Box<dyn Trap>,
}

impl ConsoleLogger {
    /// Create a new [`ConsoleBuilder`].
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    pub(super) fn new(level: Level, append: Box<dyn Append>, trap: Box<dyn Trap>) -> Self {
        Self {
            core: Arc::new(Core {
                level,
                append,
                trap,
            }),
            name: None,
            fields: Arc::new(Fields::new()),
        }
    }

    /// The threshold level. Records below it are dropped.
    pub fn level(&self) -> Level {
        self.core.level
    }

    /// The hierarchical name of this logger, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The fields attached to every record of this logger.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Emit a message at the given level.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let record = Record::builder()
            .level(level)
            .name(self.name())
            .args(args)
            .fields(&self.fields)
            .build();

        if let Err(err) = self.core.append.append(&record) {
            self.core.trap.trap(&err);
        }
    }
}

impl Logger for ConsoleLogger {
    fn enabled(&self, level: Level) -> bool {
        level >= self.core.level
    }

    fn flush(&self) {
        if let Err(err) = self.core.append.flush() {
            self.core.trap.trap(&err);
        }
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.flush();
        std::process::exit(1)
    }

    fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(Level::Error, format_args!("{message}"));
        self.flush();
        panic!("{message}")
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        let mut merged = Fields::clone(&self.fields);
        merged.merge(fields);

        Arc::new(ConsoleLogger {
            core: self.core.clone(),
            name: self.name.clone(),
            fields: Arc::new(merged),
        })
    }

    fn named(&self, name: &str) -> SharedLogger {
        let name = match (&self.name, name) {
            (_, "") => self.name.clone(),
            (None, name) => Some(Arc::from(name)),
            (Some(parent), name) => Some(Arc::from(format!("{parent}.{name}"))),
        };

        Arc::new(ConsoleLogger {
            core: self.core.clone(),
            name,
            fields: self.fields.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::panic::AssertUnwindSafe;
    use std::sync::Mutex;

    use super::*;
    use crate::Error;
    use crate::ErrorKind;

    #[derive(Debug, Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Capture {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Append for Capture {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let mut line = format!("{} ", record.level());
            if let Some(name) = record.name() {
                line.push_str(name);
                line.push_str(": ");
            }
            line.push_str(record.payload());
            for (key, value) in record.fields().iter() {
                line.push_str(&format!(" {key}={value}"));
            }
            self.0.lock().unwrap().push(line);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Append for Broken {
        fn append(&self, _: &Record) -> Result<(), Error> {
            Err(Error::from_io_error(std::io::Error::other("sink closed")))
        }
    }

    #[derive(Debug, Clone, Default)]
    struct CountTrap(Arc<Mutex<Vec<ErrorKind>>>);

    impl Trap for CountTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.kind());
        }
    }

    fn capture(level: Level) -> (ConsoleLogger, Capture) {
        let capture = Capture::default();
        let logger = ConsoleLogger::builder()
            .level(level)
            .append(capture.clone())
            .build();
        (logger, capture)
    }

    #[test]
    fn test_threshold() {
        let (logger, capture) = capture(Level::Warn);
        logger.debug(format_args!("d"));
        logger.info(format_args!("i"));
        logger.warn(format_args!("w"));
        logger.error(format_args!("e {}", 1));

        assert_eq!(capture.lines(), vec!["WARN w", "ERROR e 1"]);
    }

    #[test]
    fn test_with_fields_does_not_touch_parent() {
        let (logger, capture) = capture(Level::Info);
        let a = logger.with_fields(Fields::new().with("a", 1));
        let ab = a.with_fields(Fields::new().with("b", 2));
        let shadowed = ab.with_fields(Fields::new().with("a", "x"));

        logger.info(format_args!("root"));
        a.info(format_args!("a"));
        ab.info(format_args!("ab"));
        shadowed.info(format_args!("shadowed"));

        assert_eq!(
            capture.lines(),
            vec!["INFO root", "INFO a a=1", "INFO ab a=1 b=2", "INFO shadowed a=x b=2"]
        );
        assert!(logger.fields().is_empty());
    }

    #[test]
    fn test_named_composes() {
        let (logger, capture) = capture(Level::Info);
        let db = logger.named("db");
        let pool = db.named("pool");
        let same = pool.named("");

        db.info(format_args!("one"));
        pool.info(format_args!("two"));
        same.info(format_args!("three"));
        logger.info(format_args!("four"));

        assert_eq!(
            capture.lines(),
            vec![
                "INFO db: one",
                "INFO db.pool: two",
                "INFO db.pool: three",
                "INFO four"
            ]
        );
        assert_eq!(logger.name(), None);
    }

    #[test]
    fn test_named_keeps_fields() {
        let (logger, capture) = capture(Level::Info);
        logger
            .with_fields(Fields::new().with("k", "v"))
            .named("svc")
            .info(format_args!("up"));

        assert_eq!(capture.lines(), vec!["INFO svc: up k=v"]);
    }

    #[test]
    fn test_panic_logs_then_unwinds() {
        let (logger, capture) = capture(Level::Info);

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            logger.panic(format_args!("invariant {} broken", 7));
        }));

        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("invariant 7 broken")
        );
        assert_eq!(capture.lines(), vec!["ERROR invariant 7 broken"]);
    }

    #[test]
    fn test_panic_unwinds_even_when_filtered() {
        let (logger, capture) = capture(Level::Fatal);

        let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
            logger.panic(format_args!("quiet"));
        }));

        assert!(result.is_err());
        assert!(capture.lines().is_empty());
    }

    #[test]
    fn test_write_failure_goes_to_trap() {
        let trap = CountTrap::default();
        let logger = ConsoleLogger::builder()
            .append(Broken)
            .trap(trap.clone())
            .build();

        logger.info(format_args!("lost"));
        logger.debug(format_args!("filtered, never written"));

        assert_eq!(*trap.0.lock().unwrap(), vec![ErrorKind::Unexpected]);
    }
}
