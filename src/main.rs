#![windows_subsystem = "windows"]
mod app;
mod background_remover;
mod batch_processor;
mod exporter;
mod folder_opener;
mod types;
mod ui;

use app::BgRemoverApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 700.0])
            .with_min_inner_size([400.0, 500.0])
            .with_drag_and_drop(true)
            .with_title("Multi Image BG Remover"),
        ..Default::default()
    };

    eframe::run_native(
        "Multi Image BG Remover",
        options,
        Box::new(|cc| Ok(Box::new(BgRemoverApp::new(cc)))),
    )
}
