use super::styles;
use crate::types::{AppState, AppStateRequest};
use egui::Color32;

pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add(
            egui::ProgressBar::new(state.progress as f32 / 100.0)
                .desired_width(400.0)
                .show_percentage()
                .animate(state.is_processing()),
        );

        if !state.error_message.is_empty() {
            ui.label(egui::RichText::new(&state.error_message).color(Color32::RED));
        } else if !state.status_message.is_empty() {
            ui.label(&state.status_message);
        }
    });

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.add_space(20.0);
        ui.scope(|ui| {
            apply_process_button_style(ui);
            let response = ui.add_enabled(
                !state.is_processing(),
                egui::Button::new("Process Images"),
            );
            if response.clicked() {
                state.pending_app_state_request = Some(AppStateRequest::ProcessImages);
            }
        });
    });
}

fn apply_process_button_style(ui: &mut egui::Ui) {
    ui.style_mut().spacing.button_padding = egui::vec2(10.0, 4.0);
    let style = &mut ui.style_mut();

    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.inactive.weak_bg_fill = styles::COLOR_SUCCESS;

    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, styles::COLOR_SUCCESS_ACTIVE);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.hovered.weak_bg_fill = styles::COLOR_SUCCESS;

    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, styles::COLOR_SUCCESS_ACTIVE);
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.weak_bg_fill = styles::COLOR_SUCCESS;
}
