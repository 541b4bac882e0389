//! Transient notifications
//!
//! Short confirmations shown in the bottom-right corner (token verified,
//! text copied). Failures are not shown here; they live in the status panels
//! of the form so they stay visible until the user acts.

use eframe::egui::{self, Color32, Rect, Vec2};
use std::time::{Duration, Instant};

/// Type of notification to display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Info,
    /// Yellow, stays a little longer
    Warning,
}

/// A single notification message
#[derive(Clone, Debug)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
    pub dismissed: bool,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        let duration = match notification_type {
            NotificationType::Warning => Duration::from_secs(6),
            _ => Duration::from_secs(3),
        };

        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
            dismissed: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    /// Get opacity for fade-in/fade-out animation
    pub fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed().as_secs_f32();
        let total = self.duration.as_secs_f32();

        if elapsed < 0.15 {
            elapsed / 0.15
        } else if elapsed > total - 0.4 {
            ((total - elapsed) / 0.4).max(0.0)
        } else {
            1.0
        }
    }
}

/// Manages all active notifications
#[derive(Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationType::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationType::Info));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(Notification::new(message, NotificationType::Warning));
    }

    pub fn has_notifications(&self) -> bool {
        self.notifications.iter().any(|n| !n.is_expired() && !n.dismissed)
    }

    pub fn dismiss_all(&mut self) {
        for n in &mut self.notifications {
            n.dismissed = true;
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        self.notifications.retain(|n| !n.is_expired() && !n.dismissed);

        if self.notifications.is_empty() {
            return;
        }

        let screen_rect = ui.ctx().viewport_rect();
        let spacing = 8.0;
        let margin = 20.0;
        let (width, height) = (300.0, 44.0);

        // Stack upwards from the bottom-right corner
        let mut y_offset = screen_rect.max.y - margin;

        for notification in &mut self.notifications {
            y_offset -= height;
            let rect = Rect::from_min_size(
                egui::pos2(screen_rect.max.x - width - margin, y_offset),
                Vec2::new(width, height),
            );
            y_offset -= spacing;

            let base_fill = ui.style().visuals.panel_fill;
            let stroke = ui.style().visuals.window_stroke();
            let fill = match notification.notification_type {
                NotificationType::Success => Color32::from_rgb(
                    base_fill.r().saturating_sub(8),
                    base_fill.g().saturating_add(24),
                    base_fill.b().saturating_sub(8),
                ),
                NotificationType::Info => Color32::from_rgb(
                    base_fill.r(),
                    base_fill.g().saturating_add(8),
                    base_fill.b().saturating_add(24),
                ),
                NotificationType::Warning => Color32::from_rgb(
                    base_fill.r().saturating_add(32),
                    base_fill.g().saturating_add(16),
                    base_fill.b().saturating_sub(16),
                ),
            };

            let opacity = notification.opacity();
            let bg = Color32::from_rgba_unmultiplied(
                fill.r(),
                fill.g(),
                fill.b(),
                (255.0 * opacity) as u8,
            );

            ui.painter().rect_filled(rect, 8.0, bg);
            ui.painter().rect_stroke(
                rect,
                8.0,
                egui::Stroke::new(stroke.width, stroke.color),
                egui::StrokeKind::Outside,
            );

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓", Color32::from_rgb(150, 255, 150)),
                NotificationType::Warning => ("⚠", Color32::from_rgb(255, 220, 100)),
                NotificationType::Info => ("ℹ", Color32::from_rgb(150, 200, 255)),
            };

            let mut ui_in = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(rect.shrink2(Vec2::new(12.0, 8.0)))
                    .layout(egui::Layout::left_to_right(egui::Align::Center)),
            );
            ui_in.label(
                egui::RichText::new(format!("{} {}", icon, notification.message))
                    .size(14.0)
                    .color(color),
            );
        }

        ui.ctx().request_repaint();
    }
}
