pub mod app_state;
pub mod batch;
pub mod gallery;
pub mod image;
pub mod navigation;
pub mod preferences;
pub mod selection;

// Re-export all public types for convenience
pub use app_state::{AppState, AppStateRequest};
pub use image::ImageCache;
pub use preferences::AppearanceMode;
