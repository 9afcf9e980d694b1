use crate::background_remover::{self, BackgroundRemover};
use crate::folder_opener::{FolderOpener, SystemFolderOpener};
use crate::types::{AppState, AppStateRequest, ImageCache};
use crate::ui::UI;
use crate::ui::styles;
use eframe::egui;
use egui::Margin;

pub struct BgRemoverApp {
    state: AppState,
    image_cache: ImageCache,
    remover: Box<dyn BackgroundRemover>,
    folder_opener: Box<dyn FolderOpener>,
}

impl Default for BgRemoverApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            image_cache: ImageCache::default(),
            remover: background_remover::from_env(),
            folder_opener: Box::new(SystemFolderOpener),
        }
    }
}

impl BgRemoverApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let ctx = &cc.egui_ctx;
        styles::init_styles(ctx);

        Self::default()
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if self.state.is_processing() {
            return;
        }
        let paths: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !paths.is_empty() {
            self.state.pending_app_state_request = Some(AppStateRequest::SelectFiles { paths });
        }
    }

    fn handle_requests(&mut self) {
        let Some(request) = self.state.pending_app_state_request.take() else {
            return;
        };
        match request {
            AppStateRequest::SelectFiles { paths } => {
                log::info!("Selected {} file(s)", paths.len());
                self.state.select_files(paths);
                self.image_cache.clear();
            }
            AppStateRequest::ProcessImages => {
                self.image_cache.clear();
                self.state.start_batch();
            }
            AppStateRequest::ShowPreview { index } => self.state.show_preview(index),
            AppStateRequest::PreviousPreview => self.state.show_previous(),
            AppStateRequest::NextPreview => self.state.show_next(),
            AppStateRequest::OpenOutputFolder => match &self.state.output_dir {
                Some(dir) => self.folder_opener.open(dir),
                None => log::warn!("No output folder to open"),
            },
            AppStateRequest::SaveSettings => self.state.save_settings(),
        }
    }

    /// Runs one batch item per frame so progress repaints in between.
    fn process_batch(&mut self, ctx: &egui::Context) {
        if !self.state.is_processing() {
            return;
        }
        self.state
            .step_batch(self.remover.as_ref(), self.folder_opener.as_ref());
        ctx.request_repaint();
    }

    /// Grows the window to fit the gallery after the focused item changes.
    fn apply_gallery_layout(&mut self, ctx: &egui::Context) {
        if !self.state.navigation_changed {
            return;
        }
        self.state.navigation_changed = false;

        let width = ctx.screen_rect().width();
        let layout = self.state.gallery_layout(width as u32);
        log::debug!(
            "Gallery layout: {} per row, {} row(s)",
            layout.thumbnails_per_row,
            layout.rows_needed
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            width,
            layout.required_height as f32,
        )));
    }
}

impl eframe::App for BgRemoverApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // apply theme
        styles::apply_theme(ctx, self.state.preferences.appearance_mode());

        self.handle_dropped_files(ctx);

        self.handle_requests();

        self.process_batch(ctx);

        self.apply_gallery_layout(ctx);

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(10, 5))
                .show(ui, |ui| {
                    UI::draw_header(ui, &mut self.state);
                });
        });

        egui::TopBottomPanel::bottom("footer_panel").show(ctx, |ui| {
            egui::Frame::NONE
                .inner_margin(Margin::symmetric(0, 15))
                .show(ui, |ui| {
                    UI::draw_footer(ui, &mut self.state);
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.navigator.is_active() {
                UI::draw_preview(ui, &mut self.state, &mut self.image_cache);
            } else if self.state.is_processing() {
                ui.centered_and_justified(|ui| {
                    ui.heading("⏳ Processing...");
                });
            } else {
                UI::draw_file_table(ui, &self.state);
            }
        });

        UI::draw_settings_window(ctx, &mut self.state);
    }
}
