//! Shell navigation state.
//!
//! DESIGN
//! ======
//! The shell shows exactly one data panel. Changing the selection remounts
//! the panel, which issues a fresh fetch.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::panels::PanelKind;

/// Dashboard shell state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// The panel currently mounted in the content area.
    pub section: PanelKind,
    /// Whether the sidebar is collapsed to icons.
    pub sidebar_collapsed: bool,
}

impl UiState {
    /// Select a panel. Returns `true` when the selection changed.
    pub fn select(&mut self, section: PanelKind) -> bool {
        if self.section == section {
            return false;
        }
        self.section = section;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}
