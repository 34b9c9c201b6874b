//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    ///
    /// If an action is overridden, preset bindings for that action are ignored.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        // Terminals report shift+g as 'G' with SHIFT; bindings are stored lowercase
        let code = match code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };

        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display
    ///
    /// Overrides shadow preset bindings for the same action.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., `Action::Quit` -> "Q")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| format!("{:?}", action), KeyBinding::display)
    }

    /// "Key: description" hint for an action, using the first binding
    fn hint(&self, action: Action) -> String {
        match self.all_bindings().iter().find(|b| b.action == action) {
            Some(binding) => format!("{}: {}", binding.display(), binding.get_description()),
            None => format!("{:?}: {}", action, action.description()),
        }
    }

    /// Footer hints for the outline list
    pub fn footer_list(&self) -> String {
        format!(
            "{}/{}: Scroll | {} | {} | {} | {}",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown),
            self.hint(Action::Search),
            self.hint(Action::Refresh),
            self.hint(Action::ToggleMenu),
            self.hint(Action::Quit),
        )
    }

    /// Footer hints while the search input has focus
    pub fn footer_search(&self) -> String {
        format!(
            "{}: Search | {}: Cancel",
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
        )
    }

    /// Footer hints while the dropdown menu is open
    pub fn footer_menu(&self) -> String {
        format!(
            "{}/{}: Navigate | {}: Select | {}: Close",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
        )
    }
}
