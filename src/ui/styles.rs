use crate::types::AppearanceMode;
use egui::Color32;

pub const COLOR_TINT: Color32 = Color32::from_rgb(55, 90, 127);
pub const COLOR_INFO: Color32 = Color32::from_rgb(52, 152, 219);
pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(0, 188, 140);
pub const COLOR_SUCCESS_ACTIVE: Color32 = Color32::from_rgb(0, 150, 112);

pub fn init_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.text_styles.insert(
        egui::TextStyle::Name("Subheading".into()),
        egui::FontId::new(12.0, egui::FontFamily::Proportional),
    );
    ctx.set_style(style);
}

pub fn apply_theme(ctx: &egui::Context, mode: AppearanceMode) {
    let visuals = match mode {
        AppearanceMode::Dark => egui::Visuals::dark(),
        AppearanceMode::Light => egui::Visuals::light(),
    };
    if ctx.style().visuals != visuals {
        ctx.set_visuals(visuals);
    }
}

pub trait RichTextExt {
    fn subheading(self) -> Self;
}

impl RichTextExt for egui::RichText {
    fn subheading(self) -> Self {
        self.text_style(egui::TextStyle::Name("Subheading".into()))
    }
}
