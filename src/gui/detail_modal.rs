use eframe::egui;
use egui_flex::{
    item,
    Flex,
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
        directory_view::rating_stars,
        theme::Theme,
    },
};

/// Which employee the detail window shows, if any, and whether a lazy per-id
/// fetch for it is still in flight.
#[derive(Default)]
pub struct DetailState {
    pub open_id: Option<u32>,
    pub loading: bool,
}

impl DetailState {
    pub fn close(&mut self) {
        self.open_id = None;
        self.loading = false;
    }
}

pub fn show(
    ctx: &egui::Context,
    state: &mut DetailState,
    directory: &DirectoryStore,
    bookmarks: &BookmarkStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let Some(id) = state.open_id else { return };

    let mut open = true;
    egui::Window::new("Employee")
        .collapsible(false)
        .resizable(false)
        .min_size(egui::Vec2::new(360.0, 240.0))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| match directory.get(id) {
            Some(employee) => employee_details(ui, employee, bookmarks, theme, actions),
            None if state.loading => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Fetching employee...");
                });
            }
            None => {
                ui.weak("Employee not found.");
            }
        });

    if !open {
        state.close();
    }
}

fn employee_details(
    ui: &mut egui::Ui,
    employee: &Employee,
    bookmarks: &BookmarkStore,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.horizontal(|ui| {
        ui.heading(employee.full_name());
        ui.colored_label(theme.star(ui.ctx()), rating_stars(employee.rating));
    });
    if let Some(title) = employee.job_title() {
        ui.weak(title);
    }
    ui.separator();

    egui::Grid::new("employee_details").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
        ui.label(theme.heading(ui.ctx(), "Department"));
        ui.label(employee.department.as_deref().unwrap_or("—"));
        ui.end_row();

        ui.label(theme.heading(ui.ctx(), "Email"));
        ui.label(&employee.email);
        ui.end_row();

        ui.label(theme.heading(ui.ctx(), "Phone"));
        ui.label(&employee.phone);
        ui.end_row();

        ui.label(theme.heading(ui.ctx(), "Age"));
        ui.label(employee.age.to_string());
        ui.end_row();

        if let Some(address) = &employee.address {
            ui.label(theme.heading(ui.ctx(), "Address"));
            let mut line = address.address.clone();
            if !address.city.is_empty() {
                line = format!("{}, {}", line, address.city);
            }
            if let Some(state) = address.state.as_deref() {
                line = format!("{}, {}", line, state);
            }
            if let Some(postal_code) = address.postal_code.as_deref() {
                line = format!("{} {}", line, postal_code);
            }
            ui.label(line);
            ui.end_row();
        }

        if let Some(university) = employee.university.as_deref() {
            ui.label(theme.heading(ui.ctx(), "University"));
            ui.label(university);
            ui.end_row();
        }
    });

    if let Some(skills) = employee.skills.as_deref() {
        if !skills.is_empty() {
            ui.add_space(6.0);
            ui.label(theme.heading(ui.ctx(), "Skills"));
            Flex::horizontal().wrap(true).show(ui, |flex| {
                for skill in skills {
                    flex.add_ui(item(), |ui| {
                        egui::Frame::new()
                            .fill(ui.visuals().widgets.inactive.bg_fill)
                            .corner_radius(4.0)
                            .inner_margin(4.0)
                            .show(ui, |ui| {
                                ui.small(skill.as_str());
                            });
                    });
                }
            });
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.horizontal(|ui| {
        let bookmarked = bookmarks.is_bookmarked(employee.id);
        let label = if bookmarked { "★ Bookmarked" } else { "☆ Bookmark" };
        if ui.button(label).clicked() {
            actions.push(UiAction::ToggleBookmark(employee.id));
        }
        if ui.button("Promote").clicked() {
            actions.push(UiAction::Promote(employee.id));
        }
    });
}
