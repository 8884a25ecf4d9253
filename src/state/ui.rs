#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Transient header state. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Small-viewport navigation menu expanded.
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Collapse the menu after a navigation link is followed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
