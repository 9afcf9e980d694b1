use crate::types::preferences::THUMB_SIZE_CHOICES;
use crate::types::{AppState, AppStateRequest, AppearanceMode};
use rfd::FileDialog;

pub fn draw_settings_window(ctx: &egui::Context, state: &mut AppState) {
    if state.settings_draft.is_none() {
        return;
    }

    let mut open = true;
    egui::Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .fixed_size([350.0, 350.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| draw_settings(ui, state));
        });

    if !open {
        state.close_settings();
    }
}

fn draw_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(10.0);
    ui.label("Theme:");
    if ui.button("Light").clicked() {
        state.set_appearance_mode(AppearanceMode::Light);
    }
    if ui.button("Dark").clicked() {
        state.set_appearance_mode(AppearanceMode::Dark);
    }

    let Some(draft) = state.settings_draft.as_mut() else {
        return;
    };

    ui.add_space(5.0);
    ui.checkbox(&mut draft.auto_open, "Auto-open output folder");
    ui.checkbox(
        &mut draft.delete_original,
        "Delete original images after processing",
    );

    ui.add_space(10.0);
    ui.label("Thumbnail size:");
    egui::ComboBox::from_id_salt("thumb_size")
        .selected_text(draft.thumb_size.to_string())
        .show_ui(ui, |ui| {
            for size in THUMB_SIZE_CHOICES {
                ui.selectable_value(&mut draft.thumb_size, size, size.to_string());
            }
        });

    ui.add_space(10.0);
    if ui.button("Set Output Folder").clicked()
        && let Some(path) = FileDialog::new().pick_folder()
    {
        state.preferences.output_dir = path.display().to_string();
    }
    if !state.preferences.output_dir.is_empty() {
        ui.label(&state.preferences.output_dir);
    }

    ui.add_space(20.0);
    if state.has_unsaved_preferences() {
        ui.label(egui::RichText::new("Unsaved changes").weak());
    }
    if ui.button("Save").clicked() {
        state.pending_app_state_request = Some(AppStateRequest::SaveSettings);
    }
}
