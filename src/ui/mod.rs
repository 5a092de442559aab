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

//! The application window.
//!
//! Everything is fetched before the window opens, so the app only
//! renders immutable views. The single piece of UI state is the flag
//! revealing the forecast table.

use crate::weather::view::{CurrentWeatherView, ForecastDay, ForecastView};

const SECTION_HEADING_SIZE: f32 = 14.0;

pub struct WeatherApp {
    current_time: String,
    current_date: String,
    current: CurrentWeatherView,
    icon: egui::TextureHandle,
    forecast: ForecastView,
    show_forecast: bool,
}

impl WeatherApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        current: CurrentWeatherView,
        icon_image: egui::ColorImage,
        forecast: ForecastView,
    ) -> Self {
        let icon =
            cc.egui_ctx
                .load_texture("weather_icon", icon_image, egui::TextureOptions::LINEAR);

        // Captured once; the labels intentionally do not tick.
        let now = chrono::Local::now();

        Self {
            current_time: now.format("%H:%M:%S").to_string(),
            current_date: now.format("%d/%m/%Y").to_string(),
            current,
            icon,
            forecast,
            show_forecast: false,
        }
    }

    fn section_heading(ui: &mut egui::Ui, text: &str) {
        ui.label(
            egui::RichText::new(text)
                .size(SECTION_HEADING_SIZE)
                .strong(),
        );
        ui.add_space(4.0);
    }

    fn draw_date_panel(&self, ui: &mut egui::Ui) {
        Self::section_heading(ui, "Current Time and Date");
        ui.horizontal(|ui| {
            ui.label(&self.current_time);
            ui.add_space(12.0);
            ui.label(&self.current_date);
        });
    }

    fn draw_current_weather(&self, ui: &mut egui::Ui) {
        Self::section_heading(ui, "Current Weather in Rio de Janeiro");
        egui::Grid::new("current_weather")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in &self.current.fields {
                    ui.label(*label);
                    ui.label(value);
                    ui.end_row();
                }

                ui.label("Icon");
                ui.image(&self.icon);
                ui.end_row();
            });
    }

    fn draw_forecast(&self, ui: &mut egui::Ui) {
        Self::section_heading(ui, "Forecast Weather in Rio de Janeiro");
        if self.forecast.is_empty() {
            ui.label("No morning forecast entries to show.");
            return;
        }

        egui::Grid::new("forecast")
            .spacing([16.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                // Header row: field-label column first, then one column per date.
                ui.label("");
                for date in self.forecast.keys() {
                    ui.label(egui::RichText::new(date).strong());
                }
                ui.end_row();

                for (row, label) in ForecastDay::LABELS.iter().enumerate() {
                    ui.label(*label);
                    for day in self.forecast.values() {
                        ui.label(day.values()[row]);
                    }
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for WeatherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                egui::Frame::group(ui.style()).show(ui, |ui| self.draw_date_panel(ui));
                ui.add_space(8.0);
                egui::Frame::group(ui.style()).show(ui, |ui| self.draw_current_weather(ui));
                ui.add_space(8.0);

                if ui.button("Show Forecasts").clicked() {
                    self.show_forecast = true;
                }

                if self.show_forecast {
                    ui.add_space(8.0);
                    egui::Frame::group(ui.style()).show(ui, |ui| self.draw_forecast(ui));
                }
            });
        });
    }
}
