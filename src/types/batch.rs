use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("No images selected.")]
    EmptyBatch,
}

/// Why a single item produced no artifact.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
    #[error("background removal failed: {0}")]
    Transform(#[from] crate::background_remover::RemoveError),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Debug)]
pub enum ItemOutcome {
    Success(PathBuf),
    Failure(ItemError),
    /// The path was not a regular file when its turn came.
    Skipped,
}

#[derive(Debug)]
pub struct BatchItem {
    pub source_path: PathBuf,
    pub outcome: ItemOutcome,
    pub original_deleted: bool,
}

impl BatchItem {
    pub fn output_path(&self) -> Option<&Path> {
        match &self.outcome {
            ItemOutcome::Success(path) => Some(path),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<String> {
        match &self.outcome {
            ItemOutcome::Failure(e) => Some(format!(
                "Error processing {}: {e}",
                self.source_path.display()
            )),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
    /// Parent of the first input; `None` when it was a bare file name.
    pub output_dir: Option<PathBuf>,
}

impl BatchReport {
    /// Artifact paths in input order.
    pub fn outputs(&self) -> Vec<PathBuf> {
        self.items
            .iter()
            .filter_map(|item| item.output_path().map(Path::to_path_buf))
            .collect()
    }

    pub fn succeeded(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Success(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Failure(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, ItemOutcome::Skipped))
            .count()
    }

    pub fn deleted(&self) -> usize {
        self.items.iter().filter(|item| item.original_deleted).count()
    }

    pub fn failure_messages(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(BatchItem::failure_message)
            .collect()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("{} processed", self.succeeded());
        if self.failed() > 0 {
            summary.push_str(&format!(", {} failed", self.failed()));
        }
        if self.skipped() > 0 {
            summary.push_str(&format!(", {} skipped", self.skipped()));
        }
        if self.deleted() > 0 {
            summary.push_str(&format!(", {} original(s) deleted", self.deleted()));
        }
        summary
    }
}

/// Integer percentage of `completed` out of `total`, rounded to nearest.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}
