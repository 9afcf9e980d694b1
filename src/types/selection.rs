use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Input files chosen by the user, in the order they were chosen.
#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    paths: Vec<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SelectionRow {
    pub file_name: String,
    pub folder: String,
}

impl SelectionSet {
    /// Replaces the whole selection. Duplicates are kept as given.
    pub fn replace(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.paths.clear();
        self.paths.extend(paths);
        log::debug!("Selection replaced with {} file(s)", self.paths.len());
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn rows(&self) -> Vec<SelectionRow> {
        self.paths.iter().map(|path| Self::row(path)).collect()
    }

    fn row(path: &Path) -> SelectionRow {
        SelectionRow {
            file_name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            folder: path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }
}
