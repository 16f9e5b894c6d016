use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    analytics_view,
    bookmarks_view,
    detail_modal::{
        self,
        DetailState,
    },
    directory_view,
    message_overlay::MessageOverlay,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
        View,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        BookmarkStore,
        DirectoryStore,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct StaffscopeApp {
    // State containers
    directory: DirectoryStore,
    bookmarks: BookmarkStore,

    // Configuration
    settings: SettingsData,

    // UI state
    view: View,
    detail: DetailState,
    theme: Theme,
    overlay: MessageOverlay,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl StaffscopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        let task_manager = TaskManager::new();
        let mut directory = DirectoryStore::new();
        directory.set_loading(true);
        task_manager.fetch_directory();

        let bookmarks = BookmarkStore::load_or_default();

        set_theme(&cc.egui_ctx, Theme::slate());
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        Self {
            directory,
            bookmarks,
            settings,
            view: View::Directory,
            detail: DetailState::default(),
            theme: Theme::slate(),
            overlay: MessageOverlay::new(),
            actions: ActionQueue::new(),
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::DirectoryLoaded(Ok(employees)) => {
                println!("Fetched {} employees", employees.len());
                self.directory.ingest(employees);
                self.directory.set_loading(false);
                self.overlay.clear_message();
            }
            // Degrade to whatever state we already had; no dedicated error
            // view, matching the rest of the dashboard.
            TaskResult::DirectoryLoaded(Err(e)) => {
                eprintln!("Error fetching employees: {}", e);
                self.directory.set_loading(false);
                self.overlay.clear_message();
            }
            TaskResult::EmployeeLoaded { id, result } => {
                self.detail.loading = false;
                match result {
                    Ok(employee) => self.directory.upsert(employee),
                    Err(e) => eprintln!("Error fetching employee {}: {}", id, e),
                }
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SetSearch(query) => self.directory.set_search_query(query),
            UiAction::ToggleDepartment(department) => self.directory.toggle_department(&department),
            UiAction::ToggleRating(rating) => self.directory.toggle_rating(rating),
            UiAction::ClearFilters => self.directory.clear_filters(),

            UiAction::ToggleBookmark(id) => {
                let Some(employee) = self.directory.get(id).cloned() else { return };
                if let Err(e) = self.bookmarks.toggle(&employee) {
                    eprintln!("Failed to save bookmarks: {}", e);
                }
            }
            UiAction::RemoveBookmark(id) => {
                if let Err(e) = self.bookmarks.remove(id) {
                    eprintln!("Failed to save bookmarks: {}", e);
                }
            }
            UiAction::ClearBookmarks => {
                if let Err(e) = self.bookmarks.clear() {
                    eprintln!("Failed to save bookmarks: {}", e);
                }
            }

            UiAction::OpenEmployee(id) => {
                self.detail.open_id = Some(id);
                // Lazy per-id fetch; ids already ingested are served locally.
                if self.directory.get(id).is_none() {
                    self.detail.loading = true;
                    self.task_manager.fetch_employee(id);
                }
            }
            // Stub: notification only, no state change anywhere.
            UiAction::Promote(id) => {
                let name = self
                    .directory
                    .get(id)
                    .map(|employee| employee.full_name())
                    .unwrap_or_else(|| format!("Employee {}", id));
                self.overlay.notify(format!("{} has been promoted!", name));
            }
        }
    }

    fn sync_theme_preference(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.theme() == egui::Theme::Dark;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                eprintln!("Failed to save settings: {}", e);
            }
        }
    }
}

impl eframe::App for StaffscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.sync_theme_preference(ctx);

        if let Some(action) = TopBar::show(
            ctx,
            &mut self.view,
            &self.theme,
            self.directory.loading(),
            self.bookmarks.len(),
        ) {
            match action {
                TopBarAction::Refresh => {
                    // Retrying after a failed first load gets the blocking
                    // overlay back; a refresh over existing data does not.
                    if self.directory.employees().is_empty() {
                        self.overlay.set_message("Loading employee directory...".to_string());
                    }
                    self.directory.set_loading(true);
                    self.task_manager.fetch_directory();
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Directory => directory_view::show(
                ui,
                &self.directory,
                &self.bookmarks,
                &self.theme,
                &mut self.actions,
            ),
            View::Bookmarks => {
                bookmarks_view::show(ui, &self.bookmarks, &self.theme, &mut self.actions)
            }
            View::Analytics => analytics_view::show(ui, &self.directory, &self.bookmarks, &self.theme),
        });

        detail_modal::show(
            ctx,
            &mut self.detail,
            &self.directory,
            &self.bookmarks,
            &self.theme,
            &mut self.actions,
        );

        self.overlay.show(ctx, &self.theme);

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action);
        }

        // Keep polling while a background fetch is outstanding.
        if self.directory.loading() || self.detail.loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
