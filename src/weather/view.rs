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

//! Display transforms from API payloads to labeled field grids.
//!
//! These functions do no I/O so they can be tested against canned
//! payloads. Numbers keep their payload precision; units are appended
//! as plain text.

use std::collections::BTreeMap;

use super::models::{CurrentConditions, ForecastResponse, WeatherError};

/// Label/value rows for the current-weather grid, in render order,
/// plus the icon code driving the image fetch.
#[derive(Debug, Clone)]
pub struct CurrentWeatherView {
    pub fields: Vec<(&'static str, String)>,
    pub icon_code: String,
}

/// Four-field summary of one forecast day, taken at 09:00
#[derive(Debug, Clone)]
pub struct ForecastDay {
    pub temperature: String,
    pub feels_like: String,
    pub temp_min: String,
    pub temp_max: String,
}

impl ForecastDay {
    /// Row labels for the forecast table, top to bottom
    pub const LABELS: [&'static str; 4] = [
        "Temperature",
        "Feels like",
        "Min temperature",
        "Max temperature",
    ];

    /// Values in the same order as [`Self::LABELS`]
    pub fn values(&self) -> [&str; 4] {
        [
            &self.temperature,
            &self.feels_like,
            &self.temp_min,
            &self.temp_max,
        ]
    }
}

/// Per-day forecast summaries keyed by date, sorted ascending
pub type ForecastView = BTreeMap<String, ForecastDay>;

/// Build the six display fields for the current-weather grid.
///
/// Fails only when the payload's `weather` array is empty.
pub fn current_weather_view(
    conditions: &CurrentConditions,
) -> Result<CurrentWeatherView, WeatherError> {
    let summary = conditions
        .weather
        .first()
        .ok_or(WeatherError::MissingCondition)?;

    let fields = vec![
        ("Weather description", capitalize(&summary.description)),
        ("Temperature", format!("{} °F", conditions.main.temp)),
        ("Feels like", format!("{} °F", conditions.main.feels_like)),
        ("Humidity", format!("{} %", conditions.main.humidity)),
        ("Wind speed", format!("{} miles/hour", conditions.wind.speed)),
        ("Clouds", format!("{} %", conditions.clouds.all)),
    ];

    Ok(CurrentWeatherView {
        fields,
        icon_code: summary.icon.clone(),
    })
}

/// Summarize the forecast to one entry per day, taken at 09:00.
///
/// Entries without a 09:00 timestamp are skipped regardless of date;
/// if a date somehow appears twice the later entry wins. An empty
/// result is valid and rendered as an empty state by the UI.
pub fn forecast_view(forecast: &ForecastResponse) -> ForecastView {
    forecast
        .list
        .iter()
        .filter(|entry| entry.dt_txt.contains("09:00"))
        .map(|entry| {
            let date = entry.dt_txt.get(..10).unwrap_or(&entry.dt_txt).to_string();
            let day = ForecastDay {
                temperature: format!("{} °F", entry.main.temp),
                feels_like: format!("{} °F", entry.main.feels_like),
                temp_min: format!("{} °F", entry.main.temp_min),
                temp_max: format!("{} °F", entry.main.temp_max),
            };
            (date, day)
        })
        .collect()
}

/// Uppercase the first character and lowercase the rest, matching how
/// the provider's descriptions are presented ("clear sky" -> "Clear sky")
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conditions() -> CurrentConditions {
        serde_json::from_str(
            r#"{
                "coord": {"lon": -43.2, "lat": -22.9},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
                "main": {"temp": 75, "feels_like": 74, "temp_min": 71.2, "temp_max": 78.8, "pressure": 1015, "humidity": 60},
                "wind": {"speed": 5, "deg": 120},
                "clouds": {"all": 10}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn current_view_has_six_fields_in_order() {
        let view = current_weather_view(&sample_conditions()).unwrap();
        let labels: Vec<&str> = view.fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Weather description",
                "Temperature",
                "Feels like",
                "Humidity",
                "Wind speed",
                "Clouds"
            ]
        );
    }

    #[test]
    fn current_view_appends_units() {
        let view = current_weather_view(&sample_conditions()).unwrap();
        let values: Vec<&str> = view.fields.iter().map(|(_, value)| value.as_str()).collect();
        assert_eq!(
            values,
            ["Clear sky", "75 °F", "74 °F", "60 %", "5 miles/hour", "10 %"]
        );
        assert_eq!(view.icon_code, "01d");
    }

    #[test]
    fn fractional_temperatures_keep_their_precision() {
        let mut conditions = sample_conditions();
        conditions.main.temp = 72.5;
        let view = current_weather_view(&conditions).unwrap();
        assert_eq!(view.fields[1].1, "72.5 °F");
    }

    #[test]
    fn description_is_capitalized() {
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize("BROKEN CLOUDS"), "Broken clouds");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn empty_weather_array_is_an_error() {
        let mut conditions = sample_conditions();
        conditions.weather.clear();
        assert!(current_weather_view(&conditions).is_err());
    }

    fn forecast_fixture(entries: &[(&str, f64)]) -> ForecastResponse {
        let list: Vec<String> = entries
            .iter()
            .map(|(dt_txt, temp)| {
                format!(
                    r#"{{"dt_txt": "{dt_txt}", "main": {{"temp": {temp}, "feels_like": {temp}, "temp_min": 60, "temp_max": 80, "humidity": 55}}}}"#
                )
            })
            .collect();

        serde_json::from_str(&format!(r#"{{"list": [{}]}}"#, list.join(","))).unwrap()
    }

    #[test]
    fn forecast_keeps_one_entry_per_day() {
        let forecast = forecast_fixture(&[
            ("2025-09-01 06:00:00", 70.0),
            ("2025-09-01 09:00:00", 71.0),
            ("2025-09-01 12:00:00", 75.0),
            ("2025-09-02 09:00:00", 68.0),
        ]);

        let view = forecast_view(&forecast);
        assert_eq!(view.len(), 2);
        assert_eq!(view["2025-09-01"].temperature, "71 °F");
        assert_eq!(view["2025-09-02"].temperature, "68 °F");
    }

    #[test]
    fn forecast_day_has_four_labeled_fields() {
        let forecast = forecast_fixture(&[("2025-09-01 09:00:00", 71.5)]);
        let view = forecast_view(&forecast);

        let day = &view["2025-09-01"];
        assert_eq!(ForecastDay::LABELS.len(), day.values().len());
        assert_eq!(day.values(), ["71.5 °F", "71.5 °F", "60 °F", "80 °F"]);
    }

    #[test]
    fn entries_without_a_morning_timestamp_are_excluded() {
        let forecast = forecast_fixture(&[
            ("2025-09-01 06:00:00", 70.0),
            ("2025-09-02 12:00:00", 75.0),
        ]);

        assert!(forecast_view(&forecast).is_empty());
    }

    #[test]
    fn duplicate_dates_keep_the_last_entry() {
        let forecast = forecast_fixture(&[
            ("2025-09-01 09:00:00", 70.0),
            ("2025-09-01 09:00:00", 72.0),
        ]);

        let view = forecast_view(&forecast);
        assert_eq!(view.len(), 1);
        assert_eq!(view["2025-09-01"].temperature, "72 °F");
    }

    #[test]
    fn forecast_dates_are_sorted_ascending() {
        let forecast = forecast_fixture(&[
            ("2025-09-03 09:00:00", 70.0),
            ("2025-09-01 09:00:00", 72.0),
            ("2025-09-02 09:00:00", 71.0),
        ]);

        let view = forecast_view(&forecast);
        let dates: Vec<&str> = view.keys().map(String::as_str).collect();
        assert_eq!(dates, ["2025-09-01", "2025-09-02", "2025-09-03"]);
    }
}
