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

//! Formatting macros for the package-level logging operations.
//!
//! Each macro takes [`format!`] arguments and logs through the active logger, or through a
//! specific [`Logger`](crate::Logger) given with a `logger:` prefix.

/// Log a message at [`Debug`](crate::Level::Debug) severity.
///
/// # Examples
///
/// ```
/// let key = "user:42";
/// logfacade::debugf!("cache miss for {key}");
///
/// let cache = logfacade::named("cache");
/// logfacade::debugf!(logger: cache, "evicted {} entries", 3);
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).debug(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::debug(::std::format_args!($($arg)+))
    };
}

/// Log a message at [`Info`](crate::Level::Info) severity.
///
/// # Examples
///
/// ```
/// logfacade::infof!("hello {}", "world");
/// ```
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).info(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::info(::std::format_args!($($arg)+))
    };
}

/// Log a message at [`Warn`](crate::Level::Warn) severity.
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).warn(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::warn(::std::format_args!($($arg)+))
    };
}

/// Log a message at [`Error`](crate::Level::Error) severity.
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).error(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::error(::std::format_args!($($arg)+))
    };
}

/// Log a message at [`Fatal`](crate::Level::Fatal) severity, then exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// let port = 80;
/// logfacade::fatalf!("cannot bind port {port}");
/// ```
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).fatal(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::fatal(::std::format_args!($($arg)+))
    };
}

/// Log a message at [`Error`](crate::Level::Error) severity, then panic with the message.
///
/// # Examples
///
/// ```
/// let caught = std::panic::catch_unwind(|| {
///     logfacade::panicf!("queue {} corrupted", "jobs");
/// });
/// assert!(caught.is_err());
/// ```
#[macro_export]
macro_rules! panicf {
    (logger: $logger:expr, $($arg:tt)+) => {{
        use $crate::Logger as _;
        ($logger).panic(::std::format_args!($($arg)+))
    }};
    ($($arg:tt)+) => {
        $crate::panic(::std::format_args!($($arg)+))
    };
}
