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

use crate::Append;
use crate::Level;
use crate::Trap;
use crate::append;
use crate::logger::ConsoleLogger;
use crate::trap::DefaultTrap;

/// A builder for configuring a [`ConsoleLogger`].
///
/// Default to [`Level::Info`], an [`append::Stdout`] with the text layout, and the
/// [`DefaultTrap`].
///
/// # Examples
///
/// ```
/// use logfacade::ConsoleLogger;
/// use logfacade::Level;
/// use logfacade::append;
/// use logfacade::layout::JsonLayout;
///
/// let logger = ConsoleLogger::builder()
///     .level(Level::Debug)
///     .append(append::Stderr::default().with_layout(JsonLayout::default()))
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct ConsoleBuilder {
    level: Level,
    append: Option<Box<dyn Append>>,
    trap: Option<Box<dyn Trap>>,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuilder {
    /// Create a new [`ConsoleBuilder`] with the defaults.
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            append: None,
            trap: None,
        }
    }

    /// Set the threshold level. Records below it are dropped.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the appender that writes records.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Set the trap that receives write failures.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Build the [`ConsoleLogger`].
    pub fn build(self) -> ConsoleLogger {
        let append = self
            .append
            .unwrap_or_else(|| Box::new(append::Stdout::default()));
        let trap = self.trap.unwrap_or_else(|| Box::new(DefaultTrap::default()));
        ConsoleLogger::new(self.level, append, trap)
    }
}
