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

//! Weather icon decoding.

use crate::weather::WeatherError;

/// Decode the fetched PNG bytes into an egui image ready for texture
/// upload. The icon is rendered at its native size, so no resizing.
pub fn decode_icon(bytes: &[u8]) -> Result<egui::ColorImage, WeatherError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();

    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels: Vec<egui::Color32> = rgba
        .pixels()
        .map(|p| egui::Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();

    Ok(egui::ColorImage {
        size,
        pixels,
        source_size: egui::Vec2::new(size[0] as f32, size[1] as f32),
    })
}
