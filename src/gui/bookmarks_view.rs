use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::BookmarkStore,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        directory_view::rating_stars,
        theme::Theme,
    },
};

pub fn show(
    ui: &mut egui::Ui,
    bookmarks: &BookmarkStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal(|ui| {
        ui.heading("Bookmarked Employees");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !bookmarks.is_empty() && ui.small_button("Clear all").clicked() {
                actions.push(UiAction::ClearBookmarks);
            }
        });
    });
    ui.separator();

    if bookmarks.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.weak("No bookmarks yet. Star an employee in the directory to keep them here.");
        });
        return;
    }

    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);
    let entries = bookmarks.bookmarks();

    egui::ScrollArea::vertical().show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::remainder())
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Name"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Department"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Rating"));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                body.rows(text_height, entries.len(), |mut row| {
                    let bookmark = &entries[row.index()];

                    row.col(|ui| {
                        ui.strong(bookmark.full_name()).on_hover_text(&bookmark.email);
                    });
                    row.col(|ui| {
                        ui.label(bookmark.department.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.star(ui.ctx()), rating_stars(bookmark.rating));
                    });
                    row.col(|ui| {
                        if ui.small_button("View").clicked() {
                            actions.push(UiAction::OpenEmployee(bookmark.id));
                        }
                        if ui.small_button("Remove").clicked() {
                            actions.push(UiAction::RemoveBookmark(bookmark.id));
                        }
                    });
                });
            });
    });
}
