use crate::types::selection::IMAGE_EXTENSIONS;
use crate::types::{AppState, AppStateRequest};
use rfd::FileDialog;

pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("⚙")
                .on_hover_text("Settings")
                .clicked()
            {
                state.open_settings();
            }
        });
    });

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Drag and drop images here, or click the box")
                .color(super::styles::COLOR_INFO),
        );
        ui.add_space(4.0);
        draw_drop_area(ui, state);
    });
}

fn draw_drop_area(ui: &mut egui::Ui, state: &mut AppState) {
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let stroke_color = if hovering_files {
        super::styles::COLOR_TINT
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke.color
    };

    let response = egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, stroke_color))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(480.0);
            ui.vertical_centered(|ui| {
                ui.label("Drop Image(s) Here Or Click Here To Browse");
            });
        })
        .response
        .interact(egui::Sense::click());

    if response.clicked()
        && !state.is_processing()
        && let Some(paths) = FileDialog::new()
            .add_filter("Image files", &IMAGE_EXTENSIONS)
            .pick_files()
    {
        state.pending_app_state_request = Some(AppStateRequest::SelectFiles { paths });
    }
}
