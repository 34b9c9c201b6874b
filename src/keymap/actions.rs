//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Scroll the list up one row (or move up in the menu)
    MoveUp,
    /// Scroll the list down one row (or move down in the menu)
    MoveDown,
    /// Scroll up by one viewport
    PageUp,
    /// Scroll down by one viewport
    PageDown,
    /// Jump to the first card
    GoToTop,
    /// Jump to the last card
    GoToEnd,

    // ============ Selection & Confirmation ============
    /// Confirm / submit (Enter)
    Confirm,
    /// Cancel / close (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,

    // ============ Screen-specific actions ============
    /// Focus the search input
    Search,
    /// Reload the list from page 1
    Refresh,
    /// Open or close the dropdown menu
    ToggleMenu,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Scroll up",
            Action::MoveDown => "Scroll down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Close",
            Action::Quit => "Quit",
            Action::Search => "Search",
            Action::Refresh => "Refresh",
            Action::ToggleMenu => "Menu",
        }
    }
}
