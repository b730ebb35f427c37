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

//! Logfacade is a process-wide logging facade over a hot-swappable backend.
//!
//! # Overview
//!
//! Call sites log through package-level functions and the `*f!` macros. Every call resolves
//! against the currently active [`Logger`], which starts as a console logger at
//! [`Level::Info`] writing text to stdout, and can be replaced at any time with [`setup`]. A
//! replacement is a single atomic swap: concurrent callers see either the old or the new logger,
//! and never wait on a lock held by another caller.
//!
//! # Examples
//!
//! Log with the default logger:
//!
//! ```
//! logfacade::debugf!("not emitted at the default level");
//! logfacade::infof!("hello {}", "world");
//! ```
//!
//! Reconfigure, then derive loggers carrying context:
//!
//! ```
//! use logfacade::Configuration;
//! use logfacade::Fields;
//!
//! let config = Configuration::default().json_format(true).level("debug");
//! logfacade::setup(&config).unwrap();
//!
//! let db = logfacade::named("db").with_fields(Fields::new().with("shard", 3));
//! logfacade::debugf!(logger: db.named("pool"), "{} connections idle", 8);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod backend;
pub mod config;
pub mod kv;
pub mod layout;
pub mod logger;
pub mod record;
pub mod trap;

#[cfg(feature = "bridge-log")]
pub mod bridge;

mod error;
mod facade;
mod macros;

pub use self::append::Append;
pub use self::backend::Backend;
pub use self::backend::ConsoleBackend;
pub use self::config::Configuration;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::facade::*;
pub use self::kv::Fields;
pub use self::layout::Layout;
pub use self::logger::ConsoleBuilder;
pub use self::logger::ConsoleLogger;
pub use self::logger::Logger;
pub use self::logger::SharedLogger;
pub use self::record::Level;
pub use self::trap::Trap;
