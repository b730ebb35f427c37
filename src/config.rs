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

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Level;

/// The configuration of the console logger.
///
/// For some backends there can only be one level across writers, so the console level governs
/// everything the logger emits.
///
/// Missing fields take their default values when deserialized:
///
/// ```
/// use logfacade::Configuration;
///
/// let config: Configuration = serde_json::from_str(r#"{"console_level": "warn"}"#).unwrap();
/// assert!(!config.console_json_format);
/// assert_eq!(config.console_level, "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Emit one JSON object per line instead of plain text.
    pub console_json_format: bool,
    /// The minimum level to emit, one of `debug`, `info`, `warn`, `error` or `fatal`.
    pub console_level: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            console_json_format: false,
            console_level: "info".to_string(),
        }
    }
}

impl Configuration {
    /// Set [`console_json_format`](Configuration::console_json_format).
    pub fn json_format(mut self, enabled: bool) -> Self {
        self.console_json_format = enabled;
        self
    }

    /// Set [`console_level`](Configuration::console_level).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.console_level = level.into();
        self
    }

    /// Parse the configured console level.
    ///
    /// # Errors
    ///
    /// Return a [`ConfigInvalid`](crate::ErrorKind::ConfigInvalid) error if the level is not
    /// recognized.
    pub fn parse_level(&self) -> Result<Level, Error> {
        self.console_level
            .parse()
            .map_err(|err: Error| err.with_context("field", "console_level"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_is_info_text() {
        let config = Configuration::default();
        assert!(!config.console_json_format);
        assert_eq!(config.parse_level().unwrap(), Level::Info);
    }

    #[test]
    fn test_parse_level() {
        let config = Configuration::default().level("ERROR");
        assert_eq!(config.parse_level().unwrap(), Level::Error);

        let config = Configuration::default().level("loud");
        let err = config.parse_level().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert!(err.to_string().contains("console_level"), "{err}");
    }

    #[test]
    fn test_deserialize() {
        let config: Configuration =
            serde_json::from_str(r#"{"console_json_format": true, "console_level": "debug"}"#)
                .unwrap();
        assert_eq!(config, Configuration::default().json_format(true).level("debug"));

        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }
}
