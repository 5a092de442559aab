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

//! OpenWeatherMap response payloads.
//!
//! Only the fields the viewer renders are deserialized; serde skips
//! the rest of each payload.

use serde::Deserialize;
use thiserror::Error;

/// Coordinate pair parsed from the geocoding response.
///
/// Fetched once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the `weather` array in the current-conditions payload
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionSummary {
    pub description: String,
    pub icon: String,
}

/// The `main` block shared by current conditions and forecast entries
#[derive(Debug, Clone, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
}

/// The `wind` block; speed is in miles per hour with imperial units
#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// The `clouds` block; `all` is cloudiness in percent
#[derive(Debug, Clone, Deserialize)]
pub struct Clouds {
    pub all: f64,
}

/// Current-conditions payload from the `/data/2.5/weather` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub weather: Vec<ConditionSummary>,
    pub main: Thermals,
    pub wind: Wind,
    pub clouds: Clouds,
}

/// One 3-hour entry from the `/data/2.5/forecast` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub main: Thermals,
    pub dt_txt: String,
}

/// Forecast payload; `list` holds 3-hour entries covering five days
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// Errors from the fetch and decode pipeline
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("current-conditions payload has an empty weather array")]
    MissingCondition,

    #[error("could not decode weather icon: {0}")]
    Icon(#[from] image::ImageError),

    #[error("no OpenWeatherMap API key configured")]
    MissingApiKey,
}
