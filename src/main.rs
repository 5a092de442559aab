mod config;
mod icon;
mod ui;
mod weather;

use config::AppConfig;
use eframe::egui;
use weather::{WeatherClient, WeatherError};

// Fixed location: São Cristóvão neighborhood, Rio de Janeiro (RJ), Brazil.
const ZIP_CODE: &str = "20000-000";
const COUNTRY_CODE: &str = "BR";
const WINDOW_TITLE: &str = "Rio de Janeiro Weather";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let app_config = AppConfig::load()?;
    let Some(api_key) = config::resolve_api_key(app_config.openweathermap_api_key.as_deref())
    else {
        if let Ok(path) = AppConfig::get_config_path() {
            log::error!(
                "No OpenWeatherMap API key found; set OPENWEATHERMAP_API_KEY or add it to {}",
                path.display()
            );
        }
        return Err(WeatherError::MissingApiKey.into());
    };

    let client = WeatherClient::new(api_key);

    log::info!("Resolving coordinates for {}, {}", ZIP_CODE, COUNTRY_CODE);
    let location = client.lookup_coordinates(ZIP_CODE, COUNTRY_CODE)?;
    log::info!("Location resolved to {:.4}, {:.4}", location.lat, location.lon);

    let current = weather::view::current_weather_view(&client.current_conditions(&location)?)?;
    let icon_image = icon::decode_icon(&client.icon_bytes(&current.icon_code)?)?;
    let forecast = weather::view::forecast_view(&client.forecast(&location)?);
    log::info!(
        "Fetched current conditions and {} forecast day(s)",
        forecast.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 620.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ui::WeatherApp::new(cc, current, icon_image, forecast)))),
    )?;

    Ok(())
}
