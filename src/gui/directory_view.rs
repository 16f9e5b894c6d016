use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::{
        BookmarkStore,
        DirectoryStore,
        Employee,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        filter_panel,
        theme::Theme,
    },
};

pub fn show(
    ui: &mut egui::Ui,
    directory: &DirectoryStore,
    bookmarks: &BookmarkStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal(|ui| {
        ui.label("🔍");
        let mut query = directory.search_query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search by name, email, or department")
                .desired_width(280.0),
        );
        if response.changed() {
            actions.push(UiAction::SetSearch(query));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!(
                "{} of {} employees",
                directory.filtered().len(),
                directory.employees().len()
            ));
        });
    });

    egui::CollapsingHeader::new("Filters")
        .default_open(false)
        .show(ui, |ui| filter_panel::show(ui, directory, actions));

    ui.add_space(4.0);
    ui.separator();

    if directory.filtered().is_empty() && !directory.employees().is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| ui.weak("No employees match the current filters."));
        return;
    }

    employee_table(ui, "directory_table", directory.filtered(), bookmarks, theme, actions);
}

/// Shared roster table, also used by the bookmarks view.
pub fn employee_table(
    ui: &mut egui::Ui,
    id_salt: &str,
    employees: &[Employee],
    bookmarks: &BookmarkStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let text_height =
        egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

    egui::ScrollArea::vertical().id_salt(id_salt.to_owned()).show(ui, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(150.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(40.0))
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
                    ui.label(theme.heading(ui.ctx(), "Title"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Age"));
                });
                header.col(|ui| {
                    ui.label(theme.heading(ui.ctx(), "Rating"));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                body.rows(text_height, employees.len(), |mut row| {
                    let employee = &employees[row.index()];

                    row.col(|ui| {
                        ui.strong(employee.full_name()).on_hover_text(&employee.email);
                    });
                    row.col(|ui| {
                        ui.label(employee.department.as_deref().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(employee.job_title().unwrap_or("—"));
                    });
                    row.col(|ui| {
                        ui.label(employee.age.to_string());
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.star(ui.ctx()), rating_stars(employee.rating));
                    });
                    row.col(|ui| {
                        let bookmarked = bookmarks.is_bookmarked(employee.id);
                        let star = if bookmarked { "★" } else { "☆" };
                        let hover = if bookmarked { "Remove bookmark" } else { "Bookmark" };
                        if ui.small_button(star).on_hover_text(hover).clicked() {
                            actions.push(UiAction::ToggleBookmark(employee.id));
                        }
                        if ui.small_button("View").clicked() {
                            actions.push(UiAction::OpenEmployee(employee.id));
                        }
                        if ui.small_button("Promote").clicked() {
                            actions.push(UiAction::Promote(employee.id));
                        }
                    });
                });
            });
    });
}

pub fn rating_stars(rating: Option<u8>) -> String {
    match rating {
        Some(rating) => {
            let filled = usize::from(rating.min(5));
            format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        }
        None => "—".to_string(),
    }
}
