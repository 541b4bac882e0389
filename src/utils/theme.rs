// theme.rs - Dark theme for the token checker window
use eframe::egui::{
    self, Color32, Context, CornerRadius, FontFamily, FontId, Margin, Stroke, Visuals,
};

pub const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(168, 85, 247);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 116, 139);
pub const ERROR_FG: Color32 = Color32::from_rgb(252, 165, 165);
pub const ERROR_BG: Color32 = Color32::from_rgb(60, 22, 28);
pub const ERROR_BORDER: Color32 = Color32::from_rgb(127, 29, 29);
pub const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
pub const CARD_BORDER: Color32 = Color32::from_rgb(51, 65, 85);

/// Apply the slate dark theme used by every screen
pub fn apply_app_theme(ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = Visuals::dark();

    style.visuals.window_fill = Color32::from_rgb(15, 23, 42);
    style.visuals.panel_fill = Color32::from_rgb(15, 23, 42);
    style.visuals.extreme_bg_color = Color32::from_rgb(30, 41, 59);
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.hyperlink_color = ACCENT_SOFT;
    style.visuals.selection.bg_fill = ACCENT;

    // Rounded corners
    style.visuals.window_corner_radius = CornerRadius::same(10);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = Margin::same(12);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);

    style.override_font_id = Some(FontId::new(15.0, FontFamily::Proportional));
    ctx.set_style(style);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(10))
        .stroke(Stroke::new(1.0, CARD_BORDER))
        .inner_margin(Margin::same(18))
}

pub fn error_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(ERROR_BG)
        .corner_radius(CornerRadius::same(8))
        .stroke(Stroke::new(1.0, ERROR_BORDER))
        .inner_margin(Margin::symmetric(14, 10))
}
