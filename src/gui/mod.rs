// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod progress;

pub use app::run;

use eframe::egui::Color32;

use crate::color::Hsl;

/// egui wants sRGB bytes; listing colors live as HSL.
pub(crate) fn color32(c: Hsl) -> Color32 {
    let [r, g, b] = c.to_rgb();
    Color32::from_rgb(r, g, b)
}
