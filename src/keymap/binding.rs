//! `KeyBinding` struct for mapping keys to actions
//!
//! Key strings look like "j", "pagedown", "ctrl+r" or "shift+g".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+r")
    pub key: String,

    /// The action this key triggers
    pub action: Action,

    /// Optional description override (uses action description if None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys: (accepted spellings, code, display label)
const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["up", "arrow_up"], KeyCode::Up, "↑"),
    (&["down", "arrow_down"], KeyCode::Down, "↓"),
    (&["left", "arrow_left"], KeyCode::Left, "←"),
    (&["right", "arrow_right"], KeyCode::Right, "→"),
    (&["home"], KeyCode::Home, "Home"),
    (&["end"], KeyCode::End, "End"),
    (&["pageup", "page_up", "pgup"], KeyCode::PageUp, "PgUp"),
    (&["pagedown", "page_down", "pgdn"], KeyCode::PageDown, "PgDn"),
    (&["enter", "return"], KeyCode::Enter, "Enter"),
    (&["esc", "escape"], KeyCode::Esc, "Esc"),
    (&["space"], KeyCode::Char(' '), "Space"),
    (&["tab"], KeyCode::Tab, "Tab"),
    (&["backtab"], KeyCode::BackTab, "Shift+Tab"),
    (&["backspace", "bs"], KeyCode::Backspace, "Backspace"),
    (&["delete", "del"], KeyCode::Delete, "Del"),
];

impl KeyBinding {
    /// Create a new key binding
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed.code == code && parsed.modifiers == modifiers,
            Err(_) => false,
        }
    }

    /// Parse the key string into `KeyCode` and `KeyModifiers`
    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Get the display string for this binding (e.g., "Ctrl+R")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    /// Get the description (custom or from action)
    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse a key string like "ctrl+shift+n" into `KeyCode` and `KeyModifiers`
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    let (modifier_parts, key_part) = match key.rsplit_once('+') {
        // "+" on its own, or as the final key ("ctrl++")
        Some((rest, "")) => (rest.trim_end_matches('+'), "+"),
        Some((rest, last)) => (rest, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => KeyModifiers::SUPER,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    let code = parse_key_code(key_part.trim())?;
    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(names, _, _)| names.contains(&key)) {
        return Ok(*code);
    }

    if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(format!("Unknown key: {}", key)),
    }
}

/// Format a key string for display (e.g., "ctrl+r" -> "Ctrl+R")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                name => NAMED_KEYS
                    .iter()
                    .find(|(names, _, _)| names.contains(&name))
                    .map(|(_, _, label)| (*label).to_string())
                    .unwrap_or_else(|| name.to_uppercase()),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
