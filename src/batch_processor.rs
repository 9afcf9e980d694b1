use crate::background_remover::BackgroundRemover;
use crate::exporter::{artifact_path, delete_original, save_artifact};
use crate::folder_opener::FolderOpener;
use crate::types::batch::{BatchError, BatchItem, BatchReport, ItemError, ItemOutcome, progress_percent};
use crate::types::preferences::UserPreferences;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    pub delete_original: bool,
    pub auto_open: bool,
}

impl From<&UserPreferences> for BatchOptions {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            delete_original: preferences.delete_original,
            auto_open: preferences.auto_open,
        }
    }
}

/// One batch over a fixed list of inputs, advanced one item at a time so a
/// frame loop can repaint between items.
pub struct BatchProcessor {
    paths: Vec<PathBuf>,
    options: BatchOptions,
    output_dir: Option<PathBuf>,
    items: Vec<BatchItem>,
}

impl BatchProcessor {
    pub fn new(paths: Vec<PathBuf>, options: BatchOptions) -> Result<Self, BatchError> {
        let Some(first) = paths.first() else {
            return Err(BatchError::EmptyBatch);
        };
        // The batch directory always follows the first input, whatever
        // `output_dir` the preferences hold. A bare file name has none.
        let output_dir = first
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf);

        log::info!(
            "Starting batch of {} file(s) in {}",
            paths.len(),
            output_dir
                .as_deref()
                .map_or_else(|| "the working directory".to_string(), |dir| dir.display().to_string())
        );

        Ok(Self {
            items: Vec::with_capacity(paths.len()),
            paths,
            options,
            output_dir,
        })
    }

    /// Processes every item, reporting progress after each one.
    pub fn run(
        paths: Vec<PathBuf>,
        options: BatchOptions,
        remover: &dyn BackgroundRemover,
        folder_opener: &dyn FolderOpener,
        mut on_progress: impl FnMut(u8),
    ) -> Result<BatchReport, BatchError> {
        let mut processor = Self::new(paths, options)?;
        while let Some(progress) = processor.step(remover) {
            on_progress(progress);
        }
        Ok(processor.finish(folder_opener))
    }

    pub fn total(&self) -> usize {
        self.paths.len()
    }

    pub fn completed(&self) -> usize {
        self.items.len()
    }

    pub fn is_finished(&self) -> bool {
        self.completed() == self.total()
    }

    pub fn progress(&self) -> u8 {
        progress_percent(self.completed(), self.total())
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Handles the next input and returns the new progress, or `None` once
    /// every input has been handled.
    pub fn step(&mut self, remover: &dyn BackgroundRemover) -> Option<u8> {
        let source_path = self.paths.get(self.items.len())?.clone();
        let item = self.process_item(source_path, remover);
        self.items.push(item);
        Some(self.progress())
    }

    fn process_item(&self, source_path: PathBuf, remover: &dyn BackgroundRemover) -> BatchItem {
        if !source_path.is_file() {
            log::debug!("Skipping {}: not a regular file", source_path.display());
            return BatchItem {
                source_path,
                outcome: ItemOutcome::Skipped,
                original_deleted: false,
            };
        }

        match Self::remove_background(&source_path, remover) {
            Ok(output_path) => {
                let original_deleted =
                    self.options.delete_original && delete_original(&source_path, &output_path);
                BatchItem {
                    source_path,
                    outcome: ItemOutcome::Success(output_path),
                    original_deleted,
                }
            }
            Err(e) => {
                log::error!("Error processing {}: {e}", source_path.display());
                BatchItem {
                    source_path,
                    outcome: ItemOutcome::Failure(e),
                    original_deleted: false,
                }
            }
        }
    }

    fn remove_background(
        source_path: &Path,
        remover: &dyn BackgroundRemover,
    ) -> Result<PathBuf, ItemError> {
        let input_data = std::fs::read(source_path).map_err(ItemError::Read)?;
        let output_data = remover.remove(&input_data)?;

        let output_path = artifact_path(source_path);
        save_artifact(&output_path, &output_data).map_err(ItemError::Write)?;
        Ok(output_path)
    }

    /// Closes the batch and opens its directory when `auto_open` is set.
    pub fn finish(self, folder_opener: &dyn FolderOpener) -> BatchReport {
        if !self.is_finished() {
            log::warn!(
                "Batch closed after {} of {} file(s)",
                self.completed(),
                self.total()
            );
        }

        let report = BatchReport {
            items: self.items,
            output_dir: self.output_dir,
        };
        log::info!("Batch finished: {}", report.summary());

        if self.options.auto_open
            && let Some(dir) = &report.output_dir
        {
            folder_opener.open(dir);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background_remover::{CornerKeyRemover, RemoveError};
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// Echoes a fixed payload, failing for inputs that start with `FAIL`.
    struct StubRemover;

    impl BackgroundRemover for StubRemover {
        fn remove(&self, input: &[u8]) -> Result<Vec<u8>, RemoveError> {
            if input.starts_with(b"FAIL") {
                return Err(RemoveError::Command("stub failure".to_string()));
            }
            Ok(b"png".to_vec())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl FolderOpener for RecordingOpener {
        fn open(&self, dir: &Path) {
            self.opened.borrow_mut().push(dir.to_path_buf());
        }
    }

    fn run(
        paths: Vec<PathBuf>,
        options: BatchOptions,
    ) -> (Result<BatchReport, BatchError>, Vec<u8>, Vec<PathBuf>) {
        let opener = RecordingOpener::default();
        let mut progress = Vec::new();
        let result = BatchProcessor::run(paths, options, &StubRemover, &opener, |p| {
            progress.push(p)
        });
        (result, progress, opener.opened.into_inner())
    }

    #[test]
    fn empty_input_is_reported_as_empty_batch() {
        let (result, progress, opened) = run(Vec::new(), BatchOptions { auto_open: true, ..Default::default() });

        assert_eq!(result.unwrap_err(), BatchError::EmptyBatch);
        assert!(progress.is_empty());
        assert!(opened.is_empty());
    }

    #[test]
    fn two_successful_inputs() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        let b = dir.path().join("b.png");
        std::fs::write(&a, b"a").unwrap();
        std::fs::write(&b, b"b").unwrap();

        let (result, progress, _) = run(vec![a, b], BatchOptions::default());
        let report = result.unwrap();

        assert_eq!(
            report.outputs(),
            vec![dir.path().join("a_nobg.png"), dir.path().join("b_nobg.png")]
        );
        assert_eq!(progress, vec![50, 100]);
        assert_eq!(std::fs::read(dir.path().join("a_nobg.png")).unwrap(), b"png");
    }

    #[test]
    fn missing_input_is_skipped_not_failed() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        std::fs::write(&a, b"a").unwrap();

        let (result, progress, _) = run(
            vec![a, dir.path().join("missing.png")],
            BatchOptions::default(),
        );
        let report = result.unwrap();

        assert_eq!(report.outputs(), vec![dir.path().join("a_nobg.png")]);
        assert_eq!(progress, vec![50, 100]);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn directories_are_skipped() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("folder.png");
        std::fs::create_dir(&sub).unwrap();

        let (result, progress, _) = run(vec![sub], BatchOptions::default());

        assert!(result.unwrap().outputs().is_empty());
        assert_eq!(progress, vec![100]);
    }

    #[test]
    fn failures_do_not_abort_the_batch() {
        let dir = tempdir().unwrap();
        let paths: Vec<PathBuf> = ["a.jpg", "bad.jpg", "c.jpg"]
            .iter()
            .map(|name| dir.path().join(name))
            .collect();
        std::fs::write(&paths[0], b"a").unwrap();
        std::fs::write(&paths[1], b"FAIL").unwrap();
        std::fs::write(&paths[2], b"c").unwrap();

        let (result, progress, _) = run(paths, BatchOptions::default());
        let report = result.unwrap();

        assert_eq!(
            report.outputs(),
            vec![dir.path().join("a_nobg.png"), dir.path().join("c_nobg.png")]
        );
        assert_eq!(progress, vec![33, 67, 100]);
        assert_eq!(report.failed(), 1);
        assert!(!dir.path().join("bad_nobg.png").exists());
        let messages = report.failure_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("bad.jpg"));
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let dir = tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..7)
            .map(|i| {
                let path = dir.path().join(format!("img{i}.png"));
                if i % 3 != 0 {
                    std::fs::write(&path, b"x").unwrap();
                }
                path
            })
            .collect();

        let (result, progress, _) = run(paths.clone(), BatchOptions::default());
        let report = result.unwrap();

        assert_eq!(progress.len(), paths.len());
        assert!(progress.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(progress.last(), Some(&100));
        assert!(progress[..progress.len() - 1].iter().all(|&p| p < 100));

        let outputs = report.outputs();
        assert!(outputs.len() <= paths.len());
        for output in &outputs {
            let name = output.file_name().unwrap().to_string_lossy().into_owned();
            let matching = paths
                .iter()
                .filter(|p| {
                    let stem = p.file_stem().unwrap().to_string_lossy();
                    name == format!("{stem}_nobg.png")
                })
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn delete_original_removes_source_after_success() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        std::fs::write(&a, b"a").unwrap();

        let (result, _, _) = run(
            vec![a.clone()],
            BatchOptions {
                delete_original: true,
                auto_open: false,
            },
        );
        let report = result.unwrap();

        assert!(!a.exists());
        assert!(dir.path().join("a_nobg.png").exists());
        assert_eq!(report.deleted(), 1);
    }

    #[test]
    fn delete_original_keeps_source_on_failure() {
        let dir = tempdir().unwrap();
        let bad = dir.path().join("bad.jpg");
        std::fs::write(&bad, b"FAIL").unwrap();

        let (result, _, _) = run(
            vec![bad.clone()],
            BatchOptions {
                delete_original: true,
                auto_open: false,
            },
        );

        assert!(bad.exists());
        assert_eq!(result.unwrap().deleted(), 0);
    }

    /// Removes its source file mid-item so the later cleanup has nothing to delete.
    struct VanishingSourceRemover {
        source: PathBuf,
    }

    impl BackgroundRemover for VanishingSourceRemover {
        fn remove(&self, _input: &[u8]) -> Result<Vec<u8>, RemoveError> {
            std::fs::remove_file(&self.source)
                .map_err(|e| RemoveError::Command(e.to_string()))?;
            Ok(b"png".to_vec())
        }
    }

    #[test]
    fn failed_original_delete_keeps_success() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        std::fs::write(&a, b"a").unwrap();

        let remover = VanishingSourceRemover { source: a.clone() };
        let report = BatchProcessor::run(
            vec![a],
            BatchOptions {
                delete_original: true,
                auto_open: false,
            },
            &remover,
            &RecordingOpener::default(),
            |_| {},
        )
        .unwrap();

        let item = &report.items[0];
        assert!(matches!(&item.outcome, ItemOutcome::Success(path) if *path == dir.path().join("a_nobg.png")));
        assert!(!item.original_deleted);
        assert!(dir.path().join("a_nobg.png").exists());
        assert_eq!(report.outputs(), vec![dir.path().join("a_nobg.png")]);
        assert_eq!(report.deleted(), 0);
        assert!(report.failure_messages().is_empty());
    }

    #[test]
    fn bare_file_name_has_no_folder_to_open() {
        let (result, progress, opened) = run(
            vec![PathBuf::from("bg-remover-test-missing.jpg")],
            BatchOptions {
                delete_original: false,
                auto_open: true,
            },
        );
        let report = result.unwrap();

        assert_eq!(report.output_dir, None);
        assert_eq!(progress, vec![100]);
        assert!(opened.is_empty());
    }

    #[test]
    fn auto_open_uses_first_input_directory() {
        let first_dir = tempdir().unwrap();
        let second_dir = tempdir().unwrap();
        let a = first_dir.path().join("a.jpg");
        let b = second_dir.path().join("b.jpg");
        std::fs::write(&a, b"a").unwrap();
        std::fs::write(&b, b"b").unwrap();

        let (result, _, opened) = run(
            vec![a, b],
            BatchOptions {
                delete_original: false,
                auto_open: true,
            },
        );
        let report = result.unwrap();

        assert_eq!(opened, vec![first_dir.path().to_path_buf()]);
        assert_eq!(report.output_dir.as_deref(), Some(first_dir.path()));
        // Each artifact still lands beside its own source.
        assert!(second_dir.path().join("b_nobg.png").exists());
    }

    #[test]
    fn configured_output_dir_is_not_consulted() {
        let input_dir = tempdir().unwrap();
        let configured_dir = tempdir().unwrap();
        let a = input_dir.path().join("a.jpg");
        std::fs::write(&a, b"a").unwrap();

        let mut preferences = UserPreferences::default();
        preferences.output_dir = configured_dir.path().display().to_string();
        preferences.auto_open = false;

        let (result, _, opened) = run(vec![a], BatchOptions::from(&preferences));
        let report = result.unwrap();

        assert_eq!(report.output_dir.as_deref(), Some(input_dir.path()));
        assert_eq!(report.outputs(), vec![input_dir.path().join("a_nobg.png")]);
        assert!(std::fs::read_dir(configured_dir.path()).unwrap().next().is_none());
        assert!(opened.is_empty());
    }

    #[test]
    fn step_reports_progress_per_item() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        std::fs::write(&a, b"a").unwrap();

        let mut processor =
            BatchProcessor::new(vec![a, dir.path().join("gone.jpg")], BatchOptions::default())
                .unwrap();
        assert_eq!(processor.progress(), 0);
        assert_eq!(processor.step(&StubRemover), Some(50));
        assert!(!processor.is_finished());
        assert_eq!(processor.step(&StubRemover), Some(100));
        assert!(processor.is_finished());
        assert_eq!(processor.step(&StubRemover), None);

        let report = processor.finish(&RecordingOpener::default());
        assert_eq!(report.items.len(), 2);
    }

    #[test]
    fn corner_key_remover_writes_real_png() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("photo.png");
        image::RgbaImage::from_pixel(3, 3, image::Rgba([0, 255, 0, 255]))
            .save(&source)
            .unwrap();

        let report = BatchProcessor::run(
            vec![source],
            BatchOptions::default(),
            &CornerKeyRemover::default(),
            &RecordingOpener::default(),
            |_| {},
        )
        .unwrap();

        let output = image::open(dir.path().join("photo_nobg.png")).unwrap().to_rgba8();
        assert_eq!(report.succeeded(), 1);
        assert!(output.pixels().all(|p| p.0[3] == 0));
    }
}
