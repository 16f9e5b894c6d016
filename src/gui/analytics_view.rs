use eframe::egui;

use crate::{
    core::{
        analytics,
        BookmarkStore,
        DirectoryStore,
    },
    gui::theme::Theme,
};

const SECTION_SPACING: f32 = 14.0;
const BAR_WIDTH: f32 = 320.0;

pub fn show(ui: &mut egui::Ui, directory: &DirectoryStore, bookmarks: &BookmarkStore, theme: &Theme) {
    if directory.employees().is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| ui.weak("No directory data yet."));
        return;
    }

    let employees = directory.employees();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Department Ratings");
        ui.add_space(4.0);
        for entry in analytics::department_ratings(employees) {
            bar_row(
                ui,
                &entry.department,
                entry.average_rating / 5.0,
                format!("{:.1} avg · {} employees", entry.average_rating, entry.employee_count),
                theme.accent(ui.ctx()),
            );
        }

        ui.add_space(SECTION_SPACING);
        ui.heading("Age Distribution");
        ui.add_space(4.0);
        let age_buckets = analytics::age_distribution(employees);
        let max_count = age_buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bucket in age_buckets {
            bar_row(
                ui,
                bucket.label,
                bucket.count as f32 / max_count as f32,
                bucket.count.to_string(),
                theme.good(ui.ctx()),
            );
        }

        ui.add_space(SECTION_SPACING);
        ui.heading("Performance Distribution");
        ui.add_space(4.0);
        let histogram = analytics::rating_histogram(employees);
        let max_count = histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bucket in histogram {
            let label = match bucket.rating {
                1 => "1 Star".to_string(),
                n => format!("{} Stars", n),
            };
            bar_row(
                ui,
                &label,
                bucket.count as f32 / max_count as f32,
                bucket.count.to_string(),
                theme.star(ui.ctx()),
            );
        }

        ui.add_space(SECTION_SPACING);
        ui.heading("Bookmark Trends");
        ui.add_space(4.0);
        if bookmarks.is_empty() {
            ui.weak("Bookmark a few employees to see trends here.");
            return;
        }

        ui.label(theme.heading(ui.ctx(), "By department"));
        for share in analytics::nonzero_department_shares(employees, bookmarks.bookmarks()) {
            bar_row(
                ui,
                &share.department,
                share.percentage / 100.0,
                format!("{} bookmarked ({:.0}%)", share.bookmarked, share.percentage),
                theme.warm(ui.ctx()),
            );
        }

        ui.add_space(6.0);
        ui.label(theme.heading(ui.ctx(), "By rating"));
        let bookmark_histogram = analytics::bookmark_rating_histogram(bookmarks.bookmarks());
        let max_count = bookmark_histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bucket in bookmark_histogram {
            let label = match bucket.rating {
                1 => "1 Star".to_string(),
                n => format!("{} Stars", n),
            };
            bar_row(
                ui,
                &label,
                bucket.count as f32 / max_count as f32,
                bucket.count.to_string(),
                theme.warm(ui.ctx()),
            );
        }
    });
}

fn bar_row(ui: &mut egui::Ui, label: &str, fraction: f32, text: String, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.add_sized([110.0, ui.spacing().interact_size.y], egui::Label::new(label));
        ui.add(
            egui::ProgressBar::new(fraction.clamp(0.0, 1.0))
                .desired_width(BAR_WIDTH)
                .fill(color)
                .text(text),
        );
    });
}
