use std::path::{Path, PathBuf};

use super::{
    gallery::GalleryLayout,
    navigation::PreviewNavigator,
    preferences::{AppearanceMode, UserPreferences},
    selection::SelectionSet,
};
use crate::background_remover::BackgroundRemover;
use crate::batch_processor::{BatchOptions, BatchProcessor};
use crate::folder_opener::FolderOpener;
use crate::types::batch::BatchReport;

#[derive(Debug, Clone, PartialEq)]
pub enum AppStateRequest {
    SelectFiles { paths: Vec<PathBuf> },
    ProcessImages,
    ShowPreview { index: usize },
    PreviousPreview,
    NextPreview,
    OpenOutputFolder,
    SaveSettings,
}

/// Values edited in the settings window; applied on Save.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub auto_open: bool,
    pub delete_original: bool,
    pub thumb_size: u32,
}

impl From<&UserPreferences> for SettingsDraft {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            auto_open: preferences.auto_open,
            delete_original: preferences.delete_original,
            thumb_size: preferences.thumb_size,
        }
    }
}

pub struct AppState {
    // Selection and batch
    pub selection: SelectionSet,
    pub batch: Option<BatchProcessor>,
    pub progress: u8,
    pub output_dir: Option<PathBuf>,
    pub error_message: String,
    pub status_message: String,

    // Preview
    pub navigator: PreviewNavigator,
    pub navigation_changed: bool,

    // Preferences
    pub preferences: UserPreferences,
    last_saved_preferences: UserPreferences,
    pub settings_draft: Option<SettingsDraft>,

    pub pending_app_state_request: Option<AppStateRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_preferences(UserPreferences::load())
    }
}

impl AppState {
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self {
            selection: SelectionSet::default(),
            batch: None,
            progress: 0,
            output_dir: None,
            error_message: String::new(),
            status_message: String::new(),

            navigator: PreviewNavigator::default(),
            navigation_changed: false,

            last_saved_preferences: preferences.clone(),
            preferences,
            settings_draft: None,

            pending_app_state_request: None,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.batch.is_some()
    }

    pub fn select_files(&mut self, paths: Vec<PathBuf>) {
        self.selection.replace(paths);
        self.progress = 0;
        self.error_message.clear();
        self.status_message.clear();
        self.navigator.reset(Vec::new());
        self.output_dir = None;
    }

    /// Starts a batch over the current selection. Ignored while one runs.
    pub fn start_batch(&mut self) {
        if self.is_processing() {
            log::warn!("Batch already running, ignoring process request");
            return;
        }
        self.navigator.reset(Vec::new());
        self.progress = 0;
        self.error_message.clear();
        self.status_message.clear();

        match BatchProcessor::new(
            self.selection.paths().to_vec(),
            BatchOptions::from(&self.preferences),
        ) {
            Ok(processor) => {
                self.output_dir = processor.output_dir().map(Path::to_path_buf);
                self.batch = Some(processor);
            }
            Err(e) => {
                self.error_message = format!("❌ {e}");
            }
        }
    }

    /// Advances the running batch by one item. Returns `true` while more
    /// work remains.
    pub fn step_batch(
        &mut self,
        remover: &dyn BackgroundRemover,
        folder_opener: &dyn FolderOpener,
    ) -> bool {
        let Some(processor) = self.batch.as_mut() else {
            return false;
        };
        if let Some(progress) = processor.step(remover) {
            self.progress = progress;
            return true;
        }

        if let Some(processor) = self.batch.take() {
            let report = processor.finish(folder_opener);
            self.apply_report(report);
        }
        false
    }

    fn apply_report(&mut self, report: BatchReport) {
        self.error_message = report.failure_messages().join("\n");
        self.status_message = report.summary();
        self.output_dir = report.output_dir.clone();
        self.navigator.reset(report.outputs());
        self.navigation_changed = self.navigator.is_active();
    }

    pub fn show_preview(&mut self, index: usize) {
        self.navigation_changed |= self.navigator.show(index);
    }

    pub fn show_previous(&mut self) {
        self.navigation_changed |= self.navigator.previous();
    }

    pub fn show_next(&mut self) {
        self.navigation_changed |= self.navigator.next();
    }

    pub fn gallery_layout(&self, viewport_width: u32) -> GalleryLayout {
        GalleryLayout::compute(
            self.navigator.len(),
            self.preferences.thumb_size,
            viewport_width,
        )
    }

    pub fn open_settings(&mut self) {
        if self.settings_draft.is_none() {
            self.settings_draft = Some(SettingsDraft::from(&self.preferences));
        }
    }

    pub fn close_settings(&mut self) {
        self.settings_draft = None;
    }

    pub fn set_appearance_mode(&mut self, mode: AppearanceMode) {
        self.preferences.set_appearance_mode(mode);
    }

    /// Applies the settings window values and persists the preferences.
    pub fn save_settings(&mut self) {
        if let Some(draft) = self.settings_draft.take() {
            if draft.thumb_size != self.preferences.thumb_size {
                self.navigation_changed |= self.navigator.is_active();
            }
            self.preferences.auto_open = draft.auto_open;
            self.preferences.delete_original = draft.delete_original;
            self.preferences.thumb_size = draft.thumb_size;
        }

        match self.preferences.save() {
            Ok(()) => {
                self.last_saved_preferences = self.preferences.clone();
                log::info!("Settings saved to: {}", UserPreferences::config_path().display());
            }
            Err(e) => {
                log::error!("Failed to save settings: {e}");
            }
        }
    }

    pub fn has_unsaved_preferences(&self) -> bool {
        self.preferences != self.last_saved_preferences
    }
}
