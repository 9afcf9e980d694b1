use std::path::{Path, PathBuf};

/// Focused-item cursor over the artifacts of the last batch.
#[derive(Debug, Default)]
pub struct PreviewNavigator {
    outputs: Vec<PathBuf>,
    current_index: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FocusedItem<'a> {
    Item { index: usize, path: &'a Path },
    Empty,
}

impl PreviewNavigator {
    pub fn reset(&mut self, outputs: Vec<PathBuf>) {
        self.outputs = outputs;
        self.current_index = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.outputs.is_empty()
    }

    pub fn outputs(&self) -> &[PathBuf] {
        &self.outputs
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// `None` while there is nothing to preview.
    pub fn current_index(&self) -> Option<usize> {
        self.is_active().then_some(self.current_index)
    }

    pub fn current(&self) -> FocusedItem<'_> {
        match self.outputs.get(self.current_index) {
            Some(path) => FocusedItem::Item {
                index: self.current_index,
                path,
            },
            None => FocusedItem::Empty,
        }
    }

    /// Focuses `index`. Returns `false` and leaves the state alone when the
    /// index is out of range.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.outputs.len() {
            log::debug!(
                "Ignoring preview request for index {index} of {}",
                self.outputs.len()
            );
            return false;
        }
        self.current_index = index;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.is_active() && self.current_index > 0 {
            self.show(self.current_index - 1)
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.outputs.len() {
            self.show(self.current_index + 1)
        } else {
            false
        }
    }

    pub fn counter_label(&self) -> String {
        match self.current_index() {
            Some(index) => format!("{} / {}", index + 1, self.outputs.len()),
            None => String::new(),
        }
    }
}
