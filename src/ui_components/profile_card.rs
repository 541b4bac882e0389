use eframe::egui::{self, Sense, Vec2};

use crate::models::User;
use crate::utils::format::{format_amount, format_count, format_date, format_date_time};
use crate::utils::{initial, theme};

const AVATAR_SIZE: f32 = 64.0;

/// One label/value line of the profile card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub label: &'static str,
    pub value: String,
}

impl ProfileRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

/// Display rows for a user, in card order. Dates use the local timezone.
pub fn profile_rows(user: &User) -> Vec<ProfileRow> {
    let mut rows = vec![
        ProfileRow::new("Balance", format_amount(&user.balance, &user.currency)),
        ProfileRow::new("Hold", format_amount(&user.hold, &user.currency)),
        ProfileRow::new("Active Listings", format_count(user.active_items_count)),
        ProfileRow::new("Items Sold", format_count(user.sold_items_count)),
        ProfileRow::new("Registration Date", format_date(user.register_date)),
        ProfileRow::new("Last Activity", format_date_time(user.last_activity)),
    ];

    if !user.user_title.trim().is_empty() {
        rows.push(ProfileRow::new("Title", user.user_title.trim()));
    }
    rows.push(ProfileRow::new("Likes", format_count(user.like_count)));
    rows.push(ProfileRow::new("Messages", format_count(user.message_count)));
    rows.push(ProfileRow::new("Restores", format_count(user.restore_count)));
    rows.push(ProfileRow::new(
        "Account Status",
        if user.is_banned { "Banned" } else { "Active" },
    ));
    rows
}

pub fn render_profile_card(ui: &mut egui::Ui, user: &User, avatar: Option<&egui::TextureHandle>) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            render_avatar(ui, &user.username, avatar);
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&user.username).size(22.0).strong());
                ui.label(
                    egui::RichText::new(format!("User ID: {}", user.user_id))
                        .size(13.0)
                        .color(theme::TEXT_SECONDARY),
                );
                if let Some(link) = user.profile_link() {
                    ui.hyperlink_to(egui::RichText::new("Open profile ↗").size(13.0), link);
                }
            });
        });

        ui.add_space(6.0);
        ui.separator();

        egui::Grid::new("profile_rows")
            .num_columns(2)
            .striped(true)
            .spacing(egui::vec2(24.0, 10.0))
            .show(ui, |ui| {
                for row in profile_rows(user) {
                    ui.label(egui::RichText::new(row.label).color(theme::TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut text = egui::RichText::new(row.value).strong();
                        if row.label == "Account Status" && user.is_banned {
                            text = text.color(theme::ERROR_FG);
                        }
                        ui.label(text);
                    });
                    ui.end_row();
                }
            });
    });
}

fn render_avatar(ui: &mut egui::Ui, username: &str, avatar: Option<&egui::TextureHandle>) {
    let size = Vec2::splat(AVATAR_SIZE);
    match avatar {
        Some(texture) => {
            ui.add(
                egui::Image::new(texture)
                    .fit_to_exact_size(size)
                    .corner_radius(AVATAR_SIZE / 2.0),
            );
        }
        None => {
            // Placeholder until the image arrives (or when it never does)
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, theme::ACCENT);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initial(username),
                egui::FontId::proportional(26.0),
                egui::Color32::WHITE,
            );
        }
    }
}
