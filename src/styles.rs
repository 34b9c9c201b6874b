//! Theme and style system
//!
//! One palette per theme (dark, light, no-color) plus the style helpers the
//! widgets draw with. The active theme is global so widgets don't need it
//! threaded through every render call.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl ThemeType {
    /// Resolve the configured theme name, letting a set `NO_COLOR` win
    ///
    /// See <https://no-color.org>: any non-empty value disables color.
    pub fn resolve(name: &str, no_color_env: Option<&str>) -> Self {
        if no_color_env.is_some_and(|v| !v.is_empty()) {
            return ThemeType::NoColor;
        }
        name.parse().unwrap_or_default()
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent color (borders, titles)
    pub primary: Color,
    /// Secondary accent (credits, counters)
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    /// Muted/secondary text (image URIs, timestamps)
    pub text_muted: Color,
    pub text_emphasis: Color,
    pub border: Color,
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
        }
    }

    /// No-color theme
    ///
    /// The style helpers never set fg/bg in this mode, so the palette is unused.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn colored(&self, fg: Color, fallback: Style) -> Style {
        if self.theme_type == ThemeType::NoColor {
            fallback
        } else {
            Style::default().fg(fg)
        }
    }

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        self.colored(self.primary, Style::default())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.colored(self.text, Style::default())
    }

    pub fn muted_style(&self) -> Style {
        self.colored(self.text_muted, Style::default().add_modifier(Modifier::DIM))
    }

    pub fn emphasis_style(&self) -> Style {
        self.colored(
            self.text_emphasis,
            Style::default().add_modifier(Modifier::BOLD),
        )
    }

    /// Style for a card's credit value
    pub fn accent_style(&self) -> Style {
        self.colored(self.secondary, Style::default())
    }

    pub fn success_style(&self) -> Style {
        self.colored(self.success, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn error_style(&self) -> Style {
        self.colored(self.error, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn border_style(&self) -> Style {
        self.colored(self.border, Style::default())
    }

    pub fn border_focused_style(&self) -> Style {
        self.colored(
            self.border_focused,
            Style::default().add_modifier(Modifier::BOLD),
        )
    }

    /// Style for the highlighted menu row
    pub fn highlight_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text in inputs
    pub fn placeholder_style(&self) -> Style {
        self.muted_style().add_modifier(Modifier::ITALIC)
    }
}
