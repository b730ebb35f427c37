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

//! The process-wide active logger and the operations that resolve against it.

use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;

use arc_swap::ArcSwap;

use crate::Backend;
use crate::Configuration;
use crate::ConsoleBackend;
use crate::ConsoleLogger;
use crate::Error;
use crate::Fields;
use crate::SharedLogger;

// Readers load without locking; a swap replaces the whole logger in one atomic store.
static ACTIVE: LazyLock<ArcSwap<SharedLogger>> = LazyLock::new(|| {
    let logger: SharedLogger = Arc::new(ConsoleLogger::builder().build());
    ArcSwap::from_pointee(logger)
});

fn install(logger: SharedLogger) {
    ACTIVE.store(Arc::new(logger));
}

/// Return the currently active logger.
///
/// The returned handle keeps working after a later [`setup`], but it keeps the configuration it
/// was created with.
pub fn logger() -> SharedLogger {
    let active = ACTIVE.load();
    SharedLogger::clone(&active)
}

/// Replace the active logger with one built from `config` by the [`ConsoleBackend`].
///
/// On failure the previously active logger stays in place.
///
/// # Errors
///
/// Return a [`ConfigInvalid`](crate::ErrorKind::ConfigInvalid) error if `config` is malformed.
///
/// # Examples
///
/// ```
/// use logfacade::Configuration;
///
/// logfacade::setup(&Configuration::default().level("warn")).unwrap();
/// logfacade::infof!("dropped");
/// logfacade::warnf!("disk usage at {}%", 91);
///
/// assert!(logfacade::setup(&Configuration::default().level("noisy")).is_err());
/// ```
pub fn setup(config: &Configuration) -> Result<(), Error> {
    setup_with(&ConsoleBackend::default(), config)
}

/// Replace the active logger with one built from `config` by `backend`.
///
/// On failure the previously active logger stays in place.
///
/// # Errors
///
/// Return the error of [`Backend::build`].
pub fn setup_with(backend: &dyn Backend, config: &Configuration) -> Result<(), Error> {
    let logger = backend.build(config)?;
    install(logger);
    Ok(())
}

/// Build a logger from `config`, install it as the active logger, and return it.
///
/// Both effects happen: this is [`setup`] that also hands the new logger back. Callers who want
/// a standalone instance without touching the active logger should use
/// [`Backend::build`] directly.
///
/// # Errors
///
/// Return a [`ConfigInvalid`](crate::ErrorKind::ConfigInvalid) error if `config` is malformed.
pub fn new(config: &Configuration) -> Result<SharedLogger, Error> {
    new_with(&ConsoleBackend::default(), config)
}

/// Build a logger from `config` with `backend`, install it as the active logger, and return it.
///
/// # Errors
///
/// Return the error of [`Backend::build`].
pub fn new_with(backend: &dyn Backend, config: &Configuration) -> Result<SharedLogger, Error> {
    let logger = backend.build(config)?;
    install(logger.clone());
    Ok(logger)
}

/// Log at [`Debug`](crate::Level::Debug) through the active logger. See [`debugf!`](crate::debugf).
pub fn debug(args: fmt::Arguments<'_>) {
    ACTIVE.load().debug(args);
}

/// Log at [`Info`](crate::Level::Info) through the active logger. See [`infof!`](crate::infof).
pub fn info(args: fmt::Arguments<'_>) {
    ACTIVE.load().info(args);
}

/// Log at [`Warn`](crate::Level::Warn) through the active logger. See [`warnf!`](crate::warnf).
pub fn warn(args: fmt::Arguments<'_>) {
    ACTIVE.load().warn(args);
}

/// Log at [`Error`](crate::Level::Error) through the active logger. See [`errorf!`](crate::errorf).
pub fn error(args: fmt::Arguments<'_>) {
    ACTIVE.load().error(args);
}

/// Log at [`Fatal`](crate::Level::Fatal) through the active logger and exit the process.
pub fn fatal(args: fmt::Arguments<'_>) -> ! {
    ACTIVE.load().fatal(args)
}

/// Log at [`Error`](crate::Level::Error) through the active logger and panic.
pub fn panic(args: fmt::Arguments<'_>) -> ! {
    ACTIVE.load().panic(args)
}

/// Derive a logger carrying `fields` from the active logger.
pub fn with_fields(fields: Fields) -> SharedLogger {
    ACTIVE.load().with_fields(fields)
}

/// Derive a logger named `name` from the active logger.
pub fn named(name: &str) -> SharedLogger {
    ACTIVE.load().named(name)
}
