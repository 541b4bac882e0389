//! Token input row: masked field plus the verify button
//!
//! Enter in the field submits just like the button. The button stays disabled
//! while the field is blank or a verification is already running.

use eframe::egui;

use crate::app_state::Session;
use crate::utils::theme;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TokenFormResponse {
    /// User asked to verify
    pub submitted: bool,
    /// Token text changed this frame
    pub edited: bool,
}

pub fn render_token_form(ui: &mut egui::Ui, session: &mut Session) -> TokenFormResponse {
    let mut out = TokenFormResponse::default();
    let loading = session.profile().is_loading();

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🔑").size(18.0).color(theme::TEXT_SECONDARY));

        let button_width = 140.0;
        let field_width = (ui.available_width() - button_width - 16.0).max(120.0);

        let field = ui.add(
            egui::TextEdit::singleline(session.token_mut())
                .password(true)
                .hint_text("Enter your API Token")
                .desired_width(field_width),
        );

        if field.changed() {
            out.edited = true;
        }
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            out.submitted = true;
        }

        let label = if loading { "Verifying..." } else { "Verify Token" };
        let button = egui::Button::new(egui::RichText::new(label).strong())
            .fill(theme::ACCENT)
            .min_size(egui::vec2(button_width, 34.0));

        let enabled = session.can_verify();
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                if loading {
                    ui.add(egui::Spinner::new().size(16.0));
                }
                if ui.add(button).clicked() {
                    out.submitted = true;
                }
            });
        });
    });

    // Enter while a request is running must not queue another one
    if loading {
        out.submitted = false;
    }
    out
}
