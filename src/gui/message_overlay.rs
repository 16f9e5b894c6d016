use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Two jobs: a blocking spinner overlay while the first fetch is in flight,
/// and a transient notice toast (promote confirmations and the like).
pub struct MessageOverlay {
    pub active: bool,
    pub message: Option<String>,
    notice: Option<(String, Instant)>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self {
            active: true,
            message: Some("Loading employee directory...".to_string()),
            notice: None,
        }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.active = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.active = false;
    }

    pub fn notify(&mut self, message: String) {
        self.notice = Some((message, Instant::now()));
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if self.active {
            // Dim everything behind the spinner.
            egui::Area::new(egui::Id::new("message_overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::Pos2::new(0.0, 0.0))
                .show(ctx, |ui| {
                    let screen_size = ui.ctx().screen_rect().size();
                    ui.allocate_space(screen_size);
                    ui.painter().rect_filled(
                        ui.ctx().screen_rect(),
                        0.0,
                        egui::Color32::from_black_alpha(120),
                    );
                });

            let message: String = match &self.message {
                None => "Loading...".to_string(),
                Some(value) => value.to_string(),
            };

            egui::Window::new("message_box")
                .order(egui::Order::Foreground)
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .fixed_size(egui::Vec2::new(220.0, 100.0))
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label(message);
                    });
                });
        }

        self.show_notice(ctx, theme);
    }

    fn show_notice(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some((message, shown_at)) = &self.notice else { return };

        if shown_at.elapsed() > NOTICE_DURATION {
            self.notice = None;
            return;
        }

        egui::Window::new("notice_toast")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(theme.good(ui.ctx()), "✔");
                    ui.label(message);
                });
            });

        // Keep repainting so the toast disappears without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
