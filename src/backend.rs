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

//! The seam between the facade and the logging engine.

use std::fmt;
use std::sync::Arc;

use crate::Append;
use crate::Configuration;
use crate::ConsoleLogger;
use crate::Error;
use crate::Layout;
use crate::SharedLogger;
use crate::append::Stdout;
use crate::layout::JsonLayout;
use crate::layout::TextLayout;

/// Constructs loggers from a [`Configuration`].
///
/// The facade only talks to its engine through this trait, so any engine that can build a
/// [`Logger`](crate::Logger) from a configuration can be installed with
/// [`setup_with`](crate::setup_with).
pub trait Backend: fmt::Debug + Send + Sync {
    /// Build a new logger honoring `config`.
    ///
    /// # Errors
    ///
    /// Return a [`ConfigInvalid`](crate::ErrorKind::ConfigInvalid) error if `config` is
    /// malformed, or a [`BackendInit`](crate::ErrorKind::BackendInit) error if the sink cannot
    /// be initialized.
    fn build(&self, config: &Configuration) -> Result<SharedLogger, Error>;
}

type AppendFactory = dyn Fn(Box<dyn Layout>) -> Result<Box<dyn Append>, Error> + Send + Sync;

/// The default [`Backend`], building [`ConsoleLogger`]s.
///
/// The configured level becomes the threshold and `console_json_format` selects [`JsonLayout`]
/// over [`TextLayout`]. Records go to stdout unless another sink is supplied with
/// [`with_append`](ConsoleBackend::with_append).
///
/// # Examples
///
/// ```
/// use logfacade::Backend;
/// use logfacade::Configuration;
/// use logfacade::ConsoleBackend;
///
/// let config = Configuration::default().json_format(true).level("debug");
/// let logger = ConsoleBackend::default().build(&config).unwrap();
///
/// let config = Configuration::default().level("chatty");
/// assert!(ConsoleBackend::default().build(&config).is_err());
/// ```
#[derive(Default)]
pub struct ConsoleBackend {
    append: Option<Box<AppendFactory>>,
}

impl fmt::Debug for ConsoleBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleBackend")
            .field("custom_append", &self.append.is_some())
            .finish()
    }
}

impl ConsoleBackend {
    /// Create a new [`ConsoleBackend`] writing to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stdout sink.
    ///
    /// `factory` receives the layout selected by the configuration and returns the appender to
    /// write with. A factory error is returned as is from [`Backend::build`].
    pub fn with_append<F>(mut self, factory: F) -> Self
    where
        F: Fn(Box<dyn Layout>) -> Result<Box<dyn Append>, Error> + Send + Sync + 'static,
    {
        self.append = Some(Box::new(factory));
        self
    }

    /// Build a [`ConsoleLogger`] without erasing its type.
    ///
    /// # Errors
    ///
    /// See [`Backend::build`].
    pub fn build_console(&self, config: &Configuration) -> Result<ConsoleLogger, Error> {
        let level = config.parse_level()?;

        let layout: Box<dyn Layout> = if config.console_json_format {
            Box::new(JsonLayout::default())
        } else {
            Box::new(TextLayout::default())
        };

        let append = match &self.append {
            Some(factory) => factory(layout)?,
            None => Box::new(Stdout::default().with_layout(layout)),
        };

        Ok(ConsoleLogger::builder().level(level).append(append).build())
    }
}

impl Backend for ConsoleBackend {
    fn build(&self, config: &Configuration) -> Result<SharedLogger, Error> {
        let logger = self.build_console(config)?;
        Ok(Arc::new(logger))
    }
}
