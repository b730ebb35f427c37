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

use std::fmt::Write;

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::ErrorKind;
use crate::kv::Value;
use crate::kv::Visitor;
use crate::layout::Layout;
use crate::record::Level;
use crate::record::Record;

/// A layout that formats log record as optionally colored text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 FATAL cannot bind port
/// 2024-08-11T22:44:57.172219+08:00 ERROR db.pool: connection reset peer=10.0.0.7:5432
/// 2024-08-11T22:44:57.172276+08:00  WARN db: slow query elapsed_ms=812
/// 2024-08-11T22:44:57.172329+08:00  INFO hello world
/// 2024-08-11T22:44:57.172382+08:00 DEBUG cache miss key=user:42
/// ```
///
/// By default, log levels are colored. Call [`no_color`](TextLayout::no_color) to disable
/// coloring.
///
/// Timestamps use the system timezone unless [`timezone`](TextLayout::timezone) is set.
///
/// # Examples
///
/// ```
/// use logfacade::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color();
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
    timezone: TimeZone,
    timestamp_format: Option<fn(Timestamp, &TimeZone) -> String>,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            colors: LevelColor::default(),
            no_color: false,
            timezone: TimeZone::system(),
            timestamp_format: None,
        }
    }
}

impl TextLayout {
    /// Customize the color of the fatal log level. Default to bright red.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn fatal_color(mut self, color: Color) -> Self {
        self.colors.fatal = color;
        self
    }

    /// Customize the color of the error log level. Default to red.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn error_color(mut self, color: Color) -> Self {
        self.colors.error = color;
        self
    }

    /// Customize the color of the warn log level. Default to yellow.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn warn_color(mut self, color: Color) -> Self {
        self.colors.warn = color;
        self
    }

    /// Customize the color of the info log level. Default to green.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn info_color(mut self, color: Color) -> Self {
        self.colors.info = color;
        self
    }

    /// Customize the color of the debug log level. Default to blue.
    ///
    /// No effect if `no_color` is set to `true`.
    pub fn debug_color(mut self, color: Color) -> Self {
        self.colors.debug = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logfacade::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set a user-defined timestamp format function.
    ///
    /// Default to formatting the timestamp with offset as ISO 8601 at microsecond precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::Timestamp;
    /// use jiff::tz::TimeZone;
    /// use logfacade::layout::TextLayout;
    ///
    /// // This is equivalent to the default timestamp format.
    /// let layout = TextLayout::default()
    ///     .timestamp_format(|ts, tz| format!("{:.6}", ts.display_with_offset(tz.to_offset(ts))));
    /// ```
    pub fn timestamp_format(mut self, format: fn(Timestamp, &TimeZone) -> String) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    fn format_record_level(&self, level: Level) -> ColoredString {
        self.colors.colorize_record_level(self.no_color, level)
    }
}

struct KvWriter {
    text: String,
}

impl Visitor for KvWriter {
    fn visit(&mut self, key: &str, value: Value<'_>) -> Result<(), Error> {
        write!(&mut self.text, " {key}={value}").map_err(Error::from_fmt_error)
    }
}

fn default_timestamp_format(ts: Timestamp, tz: &TimeZone) -> String {
    let offset = tz.to_offset(ts);
    format!("{:.6}", ts.display_with_offset(offset))
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let ts = Timestamp::try_from(record.time()).map_err(|err| {
            Error::new(ErrorKind::Unexpected, "record time is out of range").with_source(err)
        })?;
        let time = match self.timestamp_format {
            Some(format) => format(ts, &self.timezone),
            None => default_timestamp_format(ts, &self.timezone),
        };

        let level = self.format_record_level(record.level());
        let message = record.payload();

        let mut visitor = KvWriter { text: time };
        let written = match record.name() {
            Some(name) => write!(&mut visitor.text, " {level:>5} {name}: {message}"),
            None => write!(&mut visitor.text, " {level:>5} {message}"),
        };
        written.map_err(Error::from_fmt_error)?;
        record.fields().visit(&mut visitor)?;

        Ok(visitor.text.into_bytes())
    }
}

/// Colors for different log levels.
#[derive(Debug, Clone)]
struct LevelColor {
    fatal: Color,
    error: Color,
    warn: Color,
    info: Color,
    debug: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            fatal: Color::BrightRed,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
        }
    }
}

impl LevelColor {
    fn colorize_record_level(&self, no_color: bool, level: Level) -> ColoredString {
        if no_color {
            ColoredString::from(level.to_string())
        } else {
            let color = match level {
                Level::Fatal => self.fatal,
                Level::Error => self.error,
                Level::Warn => self.warn,
                Level::Info => self.info,
                Level::Debug => self.debug,
            };
            ColoredString::from(level.to_string()).color(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::SystemTime;

    use super::*;
    use crate::kv::Fields;

    fn fixed_time() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    fn format(layout: &TextLayout, record: &Record) -> String {
        String::from_utf8(layout.format(record).unwrap()).unwrap()
    }

    #[test]
    fn test_named_with_fields() {
        let layout = TextLayout::default()
            .no_color()
            .timestamp_format(|_, _| "T".to_string());
        let fields = Fields::new().with("b", "x").with("a", 1);
        let record = Record::builder()
            .time(fixed_time())
            .level(Level::Info)
            .name(Some("db.pool"))
            .payload("hello world")
            .fields(&fields)
            .build();

        insta::assert_snapshot!(format(&layout, &record), @"T  INFO db.pool: hello world a=1 b=x");
    }

    #[test]
    fn test_unnamed_without_fields() {
        let layout = TextLayout::default()
            .no_color()
            .timestamp_format(|_, _| "T".to_string());
        let record = Record::builder()
            .level(Level::Error)
            .payload("boom")
            .build();

        insta::assert_snapshot!(format(&layout, &record), @"T ERROR boom");
    }

    #[test]
    fn test_custom_level_color() {
        colored::control::set_override(true);
        let layout = TextLayout::default()
            .warn_color(Color::Magenta)
            .timestamp_format(|_, _| "T".to_string());
        let record = Record::builder()
            .level(Level::Warn)
            .payload("slow query")
            .build();

        assert_eq!(
            format(&layout, &record),
            "T \u{1b}[35m WARN\u{1b}[0m slow query"
        );
        let plain = format(&layout.clone().no_color(), &record);
        assert_eq!(plain, "T  WARN slow query");
    }

    #[test]
    fn test_default_timestamp_in_utc() {
        let layout = TextLayout::default().no_color().timezone(TimeZone::UTC);
        let record = Record::builder()
            .time(fixed_time())
            .level(Level::Debug)
            .payload("tick")
            .build();

        let line = format(&layout, &record);
        assert!(line.starts_with("2023-11-14T22:13:20.000000"), "{line}");
        assert!(line.ends_with("DEBUG tick"), "{line}");
    }
}
