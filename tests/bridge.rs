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

//! Records of the `log` crate are routed through the active logger.

#![cfg(feature = "bridge-log")]

mod common;

use std::sync::Once;

use logfacade::Configuration;

use crate::common::capture_backend;
use crate::common::serial;

fn install_bridge() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| logfacade::bridge::setup_log_crate().unwrap());
}

#[test]
fn test_log_records_are_forwarded() {
    let _guard = serial();
    let (backend, lines) = capture_backend();
    logfacade::setup_with(&backend, &Configuration::default().level("info")).unwrap();
    install_bridge();

    log::trace!("folded into debug and filtered");
    log::info!(target: "db", "connected");
    log::warn!(attempt = 5; "retrying {}", "payments");

    let lines = lines.take();
    assert_eq!(lines.len(), 2, "{lines:?}");
    assert!(lines[0].ends_with("db: connected"), "{lines:?}");
    assert!(lines[1].contains("WARN"), "{lines:?}");
    assert!(lines[1].ends_with("retrying payments attempt=5"), "{lines:?}");
}

#[test]
fn test_second_install_fails() {
    install_bridge();
    let err = logfacade::bridge::setup_log_crate().unwrap_err();
    assert_eq!(err.kind(), logfacade::ErrorKind::Unexpected);
}

#[test]
fn test_enabled_follows_active_threshold() {
    let _guard = serial();
    let (backend, _lines) = capture_backend();
    install_bridge();

    logfacade::setup_with(&backend, &Configuration::default().level("info")).unwrap();
    assert!(!log::log_enabled!(log::Level::Debug));
    assert!(!log::log_enabled!(log::Level::Trace));
    assert!(log::log_enabled!(log::Level::Info));

    logfacade::setup_with(&backend, &Configuration::default().level("debug")).unwrap();
    assert!(log::log_enabled!(log::Level::Debug));
    assert!(log::log_enabled!(log::Level::Trace));

    logfacade::setup_with(&backend, &Configuration::default().level("error")).unwrap();
    assert!(!log::log_enabled!(log::Level::Warn));
    assert!(log::log_enabled!(log::Level::Error));
}

#[test]
fn test_typed_values_in_json() {
    let _guard = serial();
    let (backend, lines) = capture_backend();
    let config = Configuration::default().json_format(true).level("info");
    logfacade::setup_with(&backend, &config).unwrap();
    install_bridge();

    let peer = std::net::Ipv4Addr::new(10, 0, 0, 7);
    log::warn!(attempt = 5, ok = true, ratio = 0.5, queue = "billing", peer:% = peer; "retrying");

    let lines = lines.take();
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    let fields = &line["fields"];
    assert_eq!(fields["attempt"], 5);
    assert_eq!(fields["ok"], true);
    assert_eq!(fields["ratio"], 0.5);
    assert_eq!(fields["queue"], "billing");
    assert_eq!(fields["peer"], "10.0.0.7");
}
