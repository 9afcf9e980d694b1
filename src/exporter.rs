use std::path::{Path, PathBuf};

pub const ARTIFACT_SUFFIX: &str = "_nobg";
pub const ARTIFACT_EXTENSION: &str = "png";

/// `<dir>/<stem>_nobg.png` next to `source`.
pub fn artifact_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    source.with_file_name(format!("{stem}{ARTIFACT_SUFFIX}.{ARTIFACT_EXTENSION}"))
}

pub fn save_artifact(output_path: &Path, png_data: &[u8]) -> std::io::Result<()> {
    std::fs::write(output_path, png_data)?;
    log::info!("Saved {}", output_path.display());
    Ok(())
}

/// Removes `source` once its artifact exists on disk. Failures are logged and
/// reported as `false`.
pub fn delete_original(source: &Path, output_path: &Path) -> bool {
    if !output_path.exists() {
        log::warn!(
            "Keeping original {}: output {} was not found",
            source.display(),
            output_path.display()
        );
        return false;
    }
    match std::fs::remove_file(source) {
        Ok(()) => {
            log::info!("Deleted original: {}", source.display());
            true
        }
        Err(e) => {
            log::warn!("Failed to delete original file {}: {e}", source.display());
            false
        }
    }
}
