use image::{ImageFormat, Rgba, RgbaImage};
use std::io::{Cursor, Write};
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum RemoveError {
    #[error("image decoding error: {0}")]
    Decode(#[source] image::ImageError),
    #[error("PNG encoding error: {0}")]
    Encode(#[source] image::ImageError),
    #[error("external command failed: {0}")]
    Command(String),
}

/// Turns encoded image bytes into PNG bytes with the background cleared.
pub trait BackgroundRemover {
    fn remove(&self, input: &[u8]) -> Result<Vec<u8>, RemoveError>;
}

/// In-process remover: pixels close to the top-left corner colour become
/// fully transparent.
#[derive(Debug, Clone)]
pub struct CornerKeyRemover {
    /// Maximum per-channel distance still treated as background.
    pub tolerance: u8,
}

impl Default for CornerKeyRemover {
    fn default() -> Self {
        Self { tolerance: 24 }
    }
}

impl CornerKeyRemover {
    fn key_out(&self, image: &mut RgbaImage) {
        let Some(&Rgba([kr, kg, kb, _])) = image.get_pixel_checked(0, 0) else {
            return;
        };

        for pixel in image.pixels_mut() {
            let [r, g, b, _] = pixel.0;
            let matches = r.abs_diff(kr) <= self.tolerance
                && g.abs_diff(kg) <= self.tolerance
                && b.abs_diff(kb) <= self.tolerance;
            if matches {
                pixel.0 = [r, g, b, 0];
            }
        }
    }
}

impl BackgroundRemover for CornerKeyRemover {
    fn remove(&self, input: &[u8]) -> Result<Vec<u8>, RemoveError> {
        let mut rgba = image::load_from_memory(input)
            .map_err(RemoveError::Decode)?
            .to_rgba8();

        self.key_out(&mut rgba);

        let mut output = Cursor::new(Vec::new());
        rgba.write_to(&mut output, ImageFormat::Png)
            .map_err(RemoveError::Encode)?;
        Ok(output.into_inner())
    }
}

/// Pipes the image through the `rembg` command line tool.
#[derive(Debug, Clone)]
pub struct RembgCommand {
    pub program: String,
}

impl Default for RembgCommand {
    fn default() -> Self {
        Self {
            program: "rembg".to_string(),
        }
    }
}

impl BackgroundRemover for RembgCommand {
    fn remove(&self, input: &[u8]) -> Result<Vec<u8>, RemoveError> {
        let mut child = Command::new(&self.program)
            .args(["i", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RemoveError::Command(format!("failed to start {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input)
                .map_err(|e| RemoveError::Command(format!("failed to write stdin: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| RemoveError::Command(format!("failed to wait for {}: {e}", self.program)))?;

        if !output.status.success() {
            return Err(RemoveError::Command(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(output.stdout)
    }
}

/// Picks the remover named by `BG_REMOVER_BACKEND` (`rembg`), defaulting to
/// the in-process corner key.
pub fn from_env() -> Box<dyn BackgroundRemover> {
    match std::env::var("BG_REMOVER_BACKEND").as_deref() {
        Ok("rembg") => {
            log::info!("Using rembg command for background removal");
            Box::new(RembgCommand::default())
        }
        _ => {
            log::info!("Using built-in corner key background removal");
            Box::new(CornerKeyRemover::default())
        }
    }
}
