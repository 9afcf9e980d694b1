use egui::{ColorImage, TextureHandle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Edge length of the focused preview.
pub const PREVIEW_SIZE: u32 = 200;

#[derive(Clone)]
pub struct ImageData {
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Loads `path` scaled down to fit a `max_edge` square, keeping aspect.
    pub fn load_fitted(path: &Path, max_edge: u32, ctx: &egui::Context) -> Result<ImageData, String> {
        let img = image::open(path).map_err(|e| format!("Image loading error: {}", e))?;
        let rgba_img = img.thumbnail(max_edge, max_edge).to_rgba8();
        let size = [rgba_img.width() as usize, rgba_img.height() as usize];
        let rgba_data = rgba_img.into_raw();

        let color_image = ColorImage::from_rgba_unmultiplied(size, &rgba_data);
        let texture = ctx.load_texture(
            path.display().to_string(),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        Ok(ImageData {
            texture,
            width: size[0] as u32,
            height: size[1] as u32,
        })
    }

    pub fn size(&self) -> egui::Vec2 {
        egui::vec2(self.width as f32, self.height as f32)
    }
}

/// Textures for the focused preview and the gallery, keyed by path and edge
/// length. Cleared whenever a new batch replaces the outputs.
#[derive(Default)]
pub struct ImageCache {
    images: HashMap<(PathBuf, u32), Option<ImageData>>,
}

impl ImageCache {
    pub fn get(&mut self, path: &Path, max_edge: u32, ctx: &egui::Context) -> Option<&ImageData> {
        self.images
            .entry((path.to_path_buf(), max_edge))
            .or_insert_with(|| match ImageData::load_fitted(path, max_edge, ctx) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::error!("Failed to load thumbnail for {}: {e}", path.display());
                    None
                }
            })
            .as_ref()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}
