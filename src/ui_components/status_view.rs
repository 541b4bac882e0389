use eframe::egui;

use crate::utils::theme;

pub fn render_error_box(ui: &mut egui::Ui, title: &str, message: &str) {
    theme::error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            ui.label(egui::RichText::new("✖").size(18.0).color(theme::ERROR_FG));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).strong().color(theme::ERROR_FG));
                ui.add(
                    egui::Label::new(egui::RichText::new(message).size(13.0).color(theme::ERROR_FG))
                        .wrap()
                        .selectable(true),
                );
            });
        });
    });
}

pub fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.add(egui::Spinner::new().size(36.0).color(theme::ACCENT));
        ui.add_space(40.0);
    });
}

pub fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            egui::RichText::new(
                "Your profile information will appear here upon successful verification.",
            )
            .color(theme::TEXT_MUTED),
        );
        ui.add_space(60.0);
    });
}
