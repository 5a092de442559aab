// Copyright 2025 Chris Custine
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

//! Application configuration management.
//!
//! The OpenWeatherMap API key lives in a TOML config file managed by
//! confy. The `OPENWEATHERMAP_API_KEY` environment variable takes
//! precedence so the key never has to be written to disk.

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "rio-weather-desktop";

/// Application configuration stored in TOML format
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key (optional, env var takes precedence)
    #[serde(default)]
    pub openweathermap_api_key: Option<String>,
}

impl AppConfig {
    /// Load configuration from disk, creating a default file on first run
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, "config")
    }

    /// Get the config file path for display to the user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, "config")
    }
}

/// Resolve the API key from the environment variable or the config file
pub fn resolve_api_key(config_key: Option<&str>) -> Option<String> {
    if let Ok(key) = std::env::var("OPENWEATHERMAP_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }

    config_key.map(|s| s.to_string()).filter(|s| !s.is_empty())
}
