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

//! Blocking OpenWeatherMap HTTP client.
//!
//! Every call runs on the main thread before the window opens. There
//! is no caching and no retry; any failure propagates to the caller.

use super::models::{Coordinates, CurrentConditions, ForecastResponse, WeatherError};

const GEOCODING_URL: &str = "http://api.openweathermap.org/geo/1.0/zip";
const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Client for the OpenWeatherMap endpoints the viewer uses.
///
/// Owns the resolved API key so nothing downstream touches the
/// environment or the config file after startup.
#[derive(Debug)]
pub struct WeatherClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key,
        }
    }

    /// Resolve a postal code to coordinates via the geocoding endpoint
    pub fn lookup_coordinates(
        &self,
        zip_code: &str,
        country_code: &str,
    ) -> Result<Coordinates, WeatherError> {
        let zip = format!("{zip_code},{country_code}");
        let response = self
            .http
            .get(GEOCODING_URL)
            .query(&[("zip", zip.as_str()), ("appid", self.api_key.as_str())])
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    /// Fetch current conditions in imperial units
    pub fn current_conditions(
        &self,
        location: &Coordinates,
    ) -> Result<CurrentConditions, WeatherError> {
        Ok(self.imperial_request(CURRENT_WEATHER_URL, location)?.json()?)
    }

    /// Fetch the 5-day/3-hour forecast in imperial units
    pub fn forecast(&self, location: &Coordinates) -> Result<ForecastResponse, WeatherError> {
        Ok(self.imperial_request(FORECAST_URL, location)?.json()?)
    }

    /// Fetch the PNG bytes for a weather icon code at 2x resolution
    pub fn icon_bytes(&self, icon_code: &str) -> Result<Vec<u8>, WeatherError> {
        let url = format!("http://openweathermap.org/img/wn/{icon_code}@2x.png");
        log::debug!("GET {url}");
        let response = self.http.get(&url).send()?.error_for_status()?;

        Ok(response.bytes()?.to_vec())
    }

    fn imperial_request(
        &self,
        url: &str,
        location: &Coordinates,
    ) -> Result<reqwest::blocking::Response, WeatherError> {
        log::debug!("GET {url} for {:.4}, {:.4}", location.lat, location.lon);
        let lat = location.lat.to_string();
        let lon = location.lon.to_string();

        Ok(self
            .http
            .get(url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()?
            .error_for_status()?)
    }
}
