pub mod analytics;
pub mod bookmarks;
pub mod directory;
pub mod enrich;
pub mod errors;
pub mod filter;
pub mod models;
pub mod tasks;

pub use bookmarks::BookmarkStore;
pub use directory::DirectoryStore;
pub use errors::StaffscopeError;
pub use models::Employee;
