use eframe::egui;

use crate::app_state::AnalysisStatus;
use crate::utils::theme;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisPanelResponse {
    pub analyze_clicked: bool,
    pub copy_clicked: bool,
}

/// AI analysis section shown under a verified profile
pub fn render_analysis_panel(
    ui: &mut egui::Ui,
    status: &AnalysisStatus,
    can_analyze: bool,
    has_api_key: bool,
) -> AnalysisPanelResponse {
    let mut out = AnalysisPanelResponse::default();

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("AI Analysis").size(17.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match status {
                    AnalysisStatus::Loading => "Analyzing...",
                    AnalysisStatus::Success(_) | AnalysisStatus::Error(_) => "Analyze Again",
                    AnalysisStatus::Idle => "Analyze Profile",
                };
                let button = egui::Button::new(egui::RichText::new(label).strong())
                    .fill(theme::ACCENT_SOFT);
                if ui.add_enabled(can_analyze, button).clicked() {
                    out.analyze_clicked = true;
                }
                if status.is_loading() {
                    ui.add(egui::Spinner::new().size(16.0));
                }
            });
        });

        if !has_api_key {
            ui.label(
                egui::RichText::new("No Gemini API key configured (set API_KEY).")
                    .size(12.0)
                    .color(theme::TEXT_MUTED),
            );
        }

        ui.add_space(4.0);

        match status {
            AnalysisStatus::Idle => {
                ui.label(
                    egui::RichText::new("Ask Gemini for a short summary of this profile.")
                        .color(theme::TEXT_MUTED),
                );
            }
            AnalysisStatus::Loading => {
                ui.label(egui::RichText::new("Waiting for the model...").color(theme::TEXT_SECONDARY));
            }
            AnalysisStatus::Success(text) => {
                egui::ScrollArea::vertical()
                    .id_salt("analysis_text")
                    .max_height(240.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(text.as_str()).wrap().selectable(true));
                    });
                ui.add_space(4.0);
                if ui.small_button("📋 Copy").clicked() {
                    out.copy_clicked = true;
                }
            }
            AnalysisStatus::Error(message) => {
                crate::ui_components::status_view::render_error_box(ui, "Analysis Failed", message);
            }
        }
    });

    out
}
