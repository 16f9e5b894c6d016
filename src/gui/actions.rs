// A simple ui action queue so view functions only need shared references to
// the stores; mutations are applied by the app after the frame is drawn.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Directory filters
    SetSearch(String),
    ToggleDepartment(String),
    ToggleRating(u8),
    ClearFilters,

    // Bookmarks
    ToggleBookmark(u32),
    RemoveBookmark(u32),
    ClearBookmarks,

    // Detail view
    OpenEmployee(u32),
    Promote(u32),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
