use std::{
    fs,
    path::PathBuf,
};

use super::{
    models::Employee,
    StaffscopeError,
};
use crate::persistence::get_data_file_path;

pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// Snapshot set of bookmarked employees, keyed by id. Each entry is a copy
/// captured at toggle time, not a live reference into the directory. Every
/// mutation writes the whole set back to disk before returning.
#[derive(Debug)]
pub struct BookmarkStore {
    bookmarks: Vec<Employee>,
    file_path: PathBuf,
}

impl BookmarkStore {
    pub fn load() -> Result<Self, StaffscopeError> {
        Self::load_from(get_data_file_path(BOOKMARKS_FILE))
    }

    pub fn load_from(file_path: PathBuf) -> Result<Self, StaffscopeError> {
        let bookmarks = if file_path.exists() {
            let content = fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };

        Ok(Self { bookmarks, file_path })
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to load bookmarks: {}. Starting empty.", e);
                Self { bookmarks: Vec::new(), file_path: get_data_file_path(BOOKMARKS_FILE) }
            }
        }
    }

    fn save(&self) -> Result<(), StaffscopeError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.bookmarks)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }

    pub fn bookmarks(&self) -> &[Employee] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn is_bookmarked(&self, id: u32) -> bool {
        self.bookmarks.iter().any(|bookmark| bookmark.id == id)
    }

    /// Adds a snapshot copy when absent, removes the entry when present.
    /// Returns whether the employee is bookmarked after the call.
    pub fn toggle(&mut self, employee: &Employee) -> Result<bool, StaffscopeError> {
        let now_bookmarked = if self.is_bookmarked(employee.id) {
            self.bookmarks.retain(|bookmark| bookmark.id != employee.id);
            false
        } else {
            self.bookmarks.push(employee.clone());
            true
        };
        self.save()?;
        Ok(now_bookmarked)
    }

    /// No-op when the id is not bookmarked.
    pub fn remove(&mut self, id: u32) -> Result<(), StaffscopeError> {
        self.bookmarks.retain(|bookmark| bookmark.id != id);
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), StaffscopeError> {
        self.bookmarks.clear();
        self.save()
    }
}
