mod footer;
mod header;
mod image_viewer;
mod settings_panel;
pub mod styles;

use crate::types::{AppState, ImageCache};

pub struct UI;

impl UI {
    pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
        header::draw_header(ui, state)
    }

    pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
        footer::draw_footer(ui, state)
    }

    pub fn draw_file_table(ui: &mut egui::Ui, state: &AppState) {
        image_viewer::draw_file_table(ui, state)
    }

    pub fn draw_preview(ui: &mut egui::Ui, state: &mut AppState, cache: &mut ImageCache) {
        image_viewer::draw_preview(ui, state, cache)
    }

    pub fn draw_settings_window(ctx: &egui::Context, state: &mut AppState) {
        settings_panel::draw_settings_window(ctx, state)
    }
}
