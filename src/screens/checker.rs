use eframe::egui;

use crate::app_state::{AnalysisStatus, ProfileStatus, Session};
use crate::config::AppConfig;
use crate::tasks::{TaskOutcome, TaskRunner};
use crate::ui_components::{analysis_panel, profile_card, status_view, token_form};
use crate::utils::{theme, NotificationManager};

const CONTENT_WIDTH: f32 = 640.0;

pub struct CheckerApp {
    session: Session,
    tasks: TaskRunner,
    has_api_key: bool,

    // Avatar of the profile with this sequence number
    avatar: Option<(u64, egui::TextureHandle)>,

    notifications: NotificationManager,
}

impl CheckerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        log::info!("[CheckerApp] Initializing...");
        theme::apply_app_theme(&cc.egui_ctx);

        let mut notifications = NotificationManager::new();
        if !config.has_api_key() {
            notifications.warning("AI analysis disabled: no API key");
        }

        Self {
            session: Session::new(),
            tasks: TaskRunner::new(config).with_repaint(cc.egui_ctx.clone()),
            has_api_key: config.has_api_key(),
            avatar: None,
            notifications,
        }
    }

    fn submit_token(&mut self) {
        self.avatar = None;
        self.notifications.dismiss_all();
        if let Some(ticket) = self.session.begin_verify() {
            self.tasks.verify(ticket);
        }
    }

    fn request_analysis(&mut self) {
        if let Some(ticket) = self.session.begin_analysis() {
            self.tasks.analyze(ticket);
        }
    }

    /// Apply finished background work to the session
    fn poll_tasks(&mut self, ctx: &egui::Context) {
        for outcome in self.tasks.drain() {
            match outcome {
                TaskOutcome::Verified { seq, result } => {
                    if !self.session.complete_verify(seq, result) {
                        continue;
                    }
                    if let Some(user) = self.session.user() {
                        self.notifications.success(format!("Token verified for {}", user.username));
                        if let Some(url) = user.avatar_url() {
                            self.tasks.load_avatar(seq, url.to_string());
                        }
                    }
                }
                TaskOutcome::Analyzed { seq, profile_seq, result } => {
                    self.session.complete_analysis(seq, profile_seq, result);
                }
                TaskOutcome::Avatar { profile_seq, result } => {
                    if profile_seq != self.session.profile_seq() || self.session.user().is_none() {
                        continue;
                    }
                    match result {
                        Ok(image) => {
                            let texture = ctx.load_texture(
                                format!("avatar_{}", profile_seq),
                                image,
                                egui::TextureOptions::LINEAR,
                            );
                            self.avatar = Some((profile_seq, texture));
                        }
                        Err(e) => log::warn!("[CheckerApp] Avatar unavailable: {}", e),
                    }
                }
            }
        }
    }

    fn current_avatar(&self) -> Option<&egui::TextureHandle> {
        self.avatar
            .as_ref()
            .filter(|(seq, _)| *seq == self.session.profile_seq())
            .map(|(_, texture)| texture)
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("TEST API LZT")
                    .size(36.0)
                    .strong()
                    .color(theme::ACCENT_SOFT),
            );
            ui.label(
                egui::RichText::new("Verify your Lolzteam Market API token by fetching your profile.")
                    .color(theme::TEXT_SECONDARY),
            );
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(
                    "This is an unofficial tool. Your API token is only sent directly to the lzt.market API and is never stored.",
                )
                .size(11.0)
                .color(theme::TEXT_MUTED),
            );
        });
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        match self.session.profile().clone() {
            ProfileStatus::Idle => status_view::render_placeholder(ui),
            ProfileStatus::Loading => status_view::render_loading(ui),
            ProfileStatus::Error(message) => {
                status_view::render_error_box(ui, "Verification Failed", &message)
            }
            ProfileStatus::Success(user) => {
                profile_card::render_profile_card(ui, &user, self.current_avatar());
                ui.add_space(12.0);

                let response = analysis_panel::render_analysis_panel(
                    ui,
                    self.session.analysis(),
                    self.session.can_analyze(),
                    self.has_api_key,
                );
                if response.analyze_clicked {
                    self.request_analysis();
                }
                if response.copy_clicked {
                    if let AnalysisStatus::Success(text) = self.session.analysis() {
                        ui.ctx().copy_text(text.clone());
                        self.notifications.info("Analysis copied to clipboard");
                    }
                }
            }
        }
    }
}

impl eframe::App for CheckerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tasks(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_WIDTH);
                    ui.add_space(24.0);
                    self.render_header(ui);
                    ui.add_space(20.0);

                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        let form = token_form::render_token_form(ui, &mut self.session);
                        if form.edited {
                            self.session.token_edited();
                        }
                        if form.submitted {
                            self.submit_token();
                        }

                        ui.add_space(16.0);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            self.render_result(ui);
                        });
                    });

                    ui.add_space(20.0);
                    self.render_footer(ui);
                });
            });
        });

        if self.notifications.has_notifications() {
            egui::Area::new(egui::Id::new("notification_area"))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    self.notifications.render(ui);
                });
        }

        // Spinners animate only while something is in flight
        if self.session.profile().is_loading() || self.session.analysis().is_loading() {
            ctx.request_repaint();
        }
    }
}
