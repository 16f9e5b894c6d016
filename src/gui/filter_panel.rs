use eframe::egui;
use egui_flex::{
    item,
    Flex,
};

use crate::{
    core::{
        enrich::{
            MAX_RATING,
            MIN_RATING,
        },
        DirectoryStore,
    },
    gui::actions::{
        ActionQueue,
        UiAction,
    },
};

/// Department pills and rating toggles. Selections are pushed as actions and
/// applied by the app after the frame.
pub fn show(ui: &mut egui::Ui, directory: &DirectoryStore, actions: &mut ActionQueue) {
    ui.small("Departments");
    Flex::horizontal().wrap(true).show(ui, |flex| {
        for department in directory.departments() {
            let selected = directory.department_filters().iter().any(|d| d == &department);
            flex.add_ui(item(), |ui| {
                if ui.selectable_label(selected, department.as_str()).clicked() {
                    actions.push(UiAction::ToggleDepartment(department.clone()));
                }
            });
        }
    });

    ui.add_space(6.0);
    ui.small("Rating");
    ui.horizontal(|ui| {
        for rating in MIN_RATING..=MAX_RATING {
            let selected = directory.rating_filters().contains(&rating);
            if ui.selectable_label(selected, format!("{}★", rating)).clicked() {
                actions.push(UiAction::ToggleRating(rating));
            }
        }

        if directory.has_active_filters() {
            ui.add_space(12.0);
            if ui.small_button("Clear filters").clicked() {
                actions.push(UiAction::ClearFilters);
            }
        }
    });
}
