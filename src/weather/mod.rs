//! OpenWeatherMap fetching and display transforms.
//!
//! The client talks to the geocoding, current-weather, and forecast
//! endpoints; the view module reshapes the payloads into the labeled
//! display fields the window renders.

pub mod client;
pub mod models;
pub mod view;

pub use client::WeatherClient;
pub use models::WeatherError;
