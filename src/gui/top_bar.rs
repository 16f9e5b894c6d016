use eframe::egui::{
    self,
    containers,
};

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Directory,
    Bookmarks,
    Analytics,
}

#[derive(Debug, Clone, Copy)]
pub enum TopBarAction {
    Refresh,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        view: &mut View,
        theme: &Theme,
        loading: bool,
        bookmark_count: usize,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Refresh Directory").clicked() {
                        action = Some(TopBarAction::Refresh);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.separator();

                ui.selectable_value(view, View::Directory, "Directory");
                ui.selectable_value(view, View::Bookmarks, format!("Bookmarks ({})", bookmark_count));
                ui.selectable_value(view, View::Analytics, "Analytics");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status(ui, theme, loading);
                });
            });
        });

        action
    }

    fn show_status(ui: &mut egui::Ui, theme: &Theme, loading: bool) {
        if loading {
            ui.add(egui::Spinner::new().size(14.0));
            ui.small("Fetching");
        } else {
            ui.small(egui::RichText::new("●").color(theme.good(ui.ctx())))
                .on_hover_text("Directory loaded");
        }
    }
}
