use std::path::Path;

/// Shows a directory to the user. Fire-and-forget: failures are only logged.
pub trait FolderOpener {
    fn open(&self, dir: &Path);
}

#[derive(Debug, Default)]
pub struct SystemFolderOpener;

impl FolderOpener for SystemFolderOpener {
    fn open(&self, dir: &Path) {
        if let Err(e) = opener::open(dir) {
            log::error!("Failed to open folder {}: {e}", dir.display());
        }
    }
}
