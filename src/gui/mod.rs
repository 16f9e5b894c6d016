pub mod actions;
pub mod analytics_view;
pub mod app;
pub mod bookmarks_view;
pub mod detail_modal;
pub mod directory_view;
pub mod filter_panel;
pub mod message_overlay;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::StaffscopeApp;
