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

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use logfacade::Append;
use logfacade::ConsoleBackend;
use logfacade::Error;
use logfacade::Layout;
use logfacade::record::Record;

/// Lines written by a [`Capture`] appender.
#[derive(Debug, Clone, Default)]
pub struct Lines(Arc<Mutex<Vec<String>>>);

impl Lines {
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[derive(Debug)]
struct Capture {
    layout: Box<dyn Layout>,
    lines: Lines,
}

impl Append for Capture {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let bytes = self.layout.format(record)?;
        let line = String::from_utf8_lossy(&bytes).into_owned();
        self.lines.0.lock().unwrap().push(line);
        Ok(())
    }
}

/// A console backend whose loggers write into the returned [`Lines`].
pub fn capture_backend() -> (ConsoleBackend, Lines) {
    let lines = Lines::default();
    let sink = lines.clone();
    let backend = ConsoleBackend::new().with_append(move |layout| {
        let capture = Capture {
            layout,
            lines: sink.clone(),
        };
        Ok(Box::new(capture) as Box<dyn Append>)
    });
    (backend, lines)
}

static SERIAL: Mutex<()> = Mutex::new(());

/// Serialize tests that swap the process-wide logger.
pub fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}
