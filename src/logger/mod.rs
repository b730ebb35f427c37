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

//! The [`Logger`] capability set and its console implementation.

use std::fmt;
use std::sync::Arc;

use crate::kv::Fields;
use crate::record::Level;

mod builder;
mod console;

pub use self::builder::ConsoleBuilder;
pub use self::console::ConsoleLogger;

/// A logger shared between the facade and its callers.
pub type SharedLogger = Arc<dyn Logger>;

/// The capability set every backend provides to the facade.
///
/// A logger is immutable from the caller's perspective: [`with_fields`](Logger::with_fields) and
/// [`named`](Logger::named) return a new logger carrying the accumulated context and leave the
/// receiver untouched.
///
/// The `*f!` macros accept a `logger:` prefix to call a specific logger:
///
/// ```
/// use logfacade::Fields;
///
/// let logger = logfacade::with_fields(Fields::new().with("request_id", 42));
/// logfacade::infof!(logger: logger, "request {} accepted", "GET /");
/// ```
pub trait Logger: fmt::Debug + Send + Sync + 'static {
    /// Whether a record of `level` would be emitted.
    fn enabled(&self, level: Level) -> bool;

    /// Flush any buffered records to the sink.
    fn flush(&self);

    /// Emit a message at [`Debug`](crate::Level::Debug) severity.
    fn debug(&self, args: fmt::Arguments<'_>);

    /// Emit a message at [`Info`](crate::Level::Info) severity.
    fn info(&self, args: fmt::Arguments<'_>);

    /// Emit a message at [`Warn`](crate::Level::Warn) severity.
    fn warn(&self, args: fmt::Arguments<'_>);

    /// Emit a message at [`Error`](crate::Level::Error) severity.
    fn error(&self, args: fmt::Arguments<'_>);

    /// Emit a message at [`Fatal`](crate::Level::Fatal) severity, then terminate the process.
    ///
    /// Meant for unrecoverable errors, e.g., during startup. Nothing can intercept the exit.
    fn fatal(&self, args: fmt::Arguments<'_>) -> !;

    /// Emit a message at [`Error`](crate::Level::Error) severity, then panic with the message.
    ///
    /// Unlike [`fatal`](Logger::fatal), the panic unwinds and can be caught by a supervising
    /// layer with [`std::panic::catch_unwind`].
    fn panic(&self, args: fmt::Arguments<'_>) -> !;

    /// Return a new logger that includes `fields` in every subsequent record, in addition to
    /// the fields this logger already carries.
    fn with_fields(&self, fields: Fields) -> SharedLogger;

    /// Return a new logger whose name is this logger's name extended with `name`.
    fn named(&self, name: &str) -> SharedLogger;
}
