use super::styles::RichTextExt;
use crate::types::image::PREVIEW_SIZE;
use crate::types::navigation::FocusedItem;
use crate::types::{AppState, AppStateRequest, ImageCache};

const THUMBNAIL_PADDING: f32 = 5.0;

pub fn draw_file_table(ui: &mut egui::Ui, state: &AppState) {
    if state.selection.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.heading("📁 No images selected");
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("file_table")
            .num_columns(2)
            .striped(true)
            .min_col_width(200.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Filename").subheading());
                ui.label(egui::RichText::new("Folder").subheading());
                ui.end_row();

                for row in state.selection.rows() {
                    ui.label(row.file_name);
                    ui.label(row.folder);
                    ui.end_row();
                }
            });
    });
}

pub fn draw_preview(ui: &mut egui::Ui, state: &mut AppState, cache: &mut ImageCache) {
    let FocusedItem::Item { path, .. } = state.navigator.current() else {
        return;
    };
    let path = path.to_path_buf();
    let ctx = ui.ctx().clone();

    ui.vertical_centered(|ui| {
        match cache.get(&path, PREVIEW_SIZE, &ctx) {
            Some(image) => {
                ui.add(egui::Image::new((image.texture.id(), image.size())));
            }
            None => {
                ui.label("⚠ Preview unavailable");
            }
        }
        ui.label(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
        );
        ui.label(state.navigator.counter_label());

        ui.horizontal(|ui| {
            // Center the two navigation buttons.
            let width = 2.0 * 40.0 + ui.spacing().item_spacing.x;
            ui.add_space((ui.available_width() - width).max(0.0) / 2.0);
            if ui.add_sized([40.0, 24.0], egui::Button::new("⟵")).clicked() {
                state.pending_app_state_request = Some(AppStateRequest::PreviousPreview);
            }
            if ui.add_sized([40.0, 24.0], egui::Button::new("⟶")).clicked() {
                state.pending_app_state_request = Some(AppStateRequest::NextPreview);
            }
        });

        if ui.button("Show Output Folder").clicked() {
            state.pending_app_state_request = Some(AppStateRequest::OpenOutputFolder);
        }
    });

    ui.add_space(5.0);
    draw_gallery(ui, state, cache);
}

fn draw_gallery(ui: &mut egui::Ui, state: &mut AppState, cache: &mut ImageCache) {
    let thumb_size = state.preferences.thumb_size;
    let layout = state.gallery_layout(ui.available_width().max(0.0) as u32);
    let ctx = ui.ctx().clone();
    let current_index = state.navigator.current_index();
    let outputs = state.navigator.outputs().to_vec();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (row, chunk) in outputs
            .chunks(layout.thumbnails_per_row as usize)
            .enumerate()
        {
            ui.horizontal(|ui| {
                for (column, path) in chunk.iter().enumerate() {
                    let index = row * layout.thumbnails_per_row as usize + column;
                    ui.add_space(THUMBNAIL_PADDING);

                    let cell = egui::vec2(thumb_size as f32, thumb_size as f32);
                    let response = match cache.get(path, thumb_size, &ctx) {
                        Some(image) => ui.add_sized(
                            cell,
                            egui::Image::new((image.texture.id(), image.size()))
                                .sense(egui::Sense::click()),
                        ),
                        None => ui.add_sized(cell, egui::Label::new("⚠").sense(egui::Sense::click())),
                    };

                    if current_index == Some(index) {
                        ui.painter().rect_stroke(
                            response.rect.expand(2.0),
                            2.0,
                            egui::Stroke::new(2.0, super::styles::COLOR_TINT),
                            egui::StrokeKind::Outside,
                        );
                    }
                    if response.clicked() {
                        state.pending_app_state_request =
                            Some(AppStateRequest::ShowPreview { index });
                    }
                    ui.add_space(THUMBNAIL_PADDING);
                }
            });
        }
    });
}
