//! Dropdown menu widget.
//!
//! A small bordered list anchored under the header's "Menu" button. Entries
//! are either selectable items or dividers; selection skips dividers.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, StatefulWidget, Widget},
};

/// A single dropdown entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(String),
    Divider,
}

impl MenuEntry {
    pub fn item(label: impl Into<String>) -> Self {
        MenuEntry::Item(label.into())
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, MenuEntry::Item(_))
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Item(label) => Some(label),
            MenuEntry::Divider => None,
        }
    }
}

/// The entries shown under "Menu"
///
/// None of them trigger an action yet; choosing one just closes the menu.
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::item("Item 1"),
        MenuEntry::item("Item 2"),
        MenuEntry::Divider,
        MenuEntry::item("Item 3"),
    ]
}

/// Open/closed flag and highlighted entry
#[derive(Debug, Default, Clone)]
pub struct MenuState {
    open: bool,
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with the first selectable entry highlighted
    pub fn open(&mut self, entries: &[MenuEntry]) {
        self.open = true;
        self.selected = entries.iter().position(MenuEntry::is_selectable);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
    }

    pub fn toggle(&mut self, entries: &[MenuEntry]) {
        if self.open {
            self.close();
        } else {
            self.open(entries);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move the highlight to the next selectable entry, wrapping around
    pub fn select_next(&mut self, entries: &[MenuEntry]) {
        self.step(entries, 1);
    }

    /// Move the highlight to the previous selectable entry, wrapping around
    pub fn select_previous(&mut self, entries: &[MenuEntry]) {
        self.step(entries, entries.len().saturating_sub(1));
    }

    fn step(&mut self, entries: &[MenuEntry], stride: usize) {
        let len = entries.len();
        if len == 0 {
            return;
        }
        let mut index = self.selected.unwrap_or(0);
        for _ in 0..len {
            index = (index + stride) % len;
            if entries[index].is_selectable() {
                self.selected = Some(index);
                return;
            }
        }
    }
}

/// Dropdown menu widget
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    entries: &'a [MenuEntry],
}

impl<'a> Menu<'a> {
    pub fn new(entries: &'a [MenuEntry]) -> Self {
        Self { entries }
    }

    /// Where the dropdown is drawn: right-aligned under `anchor`, clipped to `bounds`
    pub fn area(&self, anchor: Rect, bounds: Rect) -> Rect {
        let label_width = self
            .entries
            .iter()
            .filter_map(MenuEntry::label)
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let width = u16::try_from(label_width + 6)
            .unwrap_or(u16::MAX)
            .max(anchor.width)
            .min(bounds.width);
        let height = u16::try_from(self.entries.len() + 2)
            .unwrap_or(u16::MAX)
            .min(bounds.height.saturating_sub(anchor.bottom().saturating_sub(bounds.y)));

        let x = anchor.right().saturating_sub(width).max(bounds.x);
        Rect::new(x, anchor.bottom(), width, height)
    }
}

impl StatefulWidget for Menu<'_> {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.open || area.height < 3 {
            return;
        }
        let t = theme();

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, entry) in self.entries.iter().enumerate() {
            let Ok(row) = u16::try_from(i) else { break };
            if row >= inner.height {
                break;
            }
            let line_area = Rect::new(inner.x, inner.y + row, inner.width, 1);

            let line = match entry {
                MenuEntry::Divider => Line::styled(
                    "─".repeat(usize::from(inner.width)),
                    t.border_style(),
                ),
                MenuEntry::Item(label) if state.selected == Some(i) => {
                    buf.set_style(line_area, t.highlight_style());
                    Line::from(vec![Span::raw("▌ "), Span::raw(label.as_str())])
                        .style(t.highlight_style())
                }
                MenuEntry::Item(label) => {
                    Line::from(vec![Span::raw("  "), Span::raw(label.as_str())])
                        .style(t.text_style())
                }
            };
            line.render(line_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_default_entries_layout() {
        let entries = default_entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].label(), Some("Item 1"));
        assert_eq!(entries[1].label(), Some("Item 2"));
        assert_eq!(entries[2], MenuEntry::Divider);
        assert_eq!(entries[3].label(), Some("Item 3"));
    }

    #[test]
    fn test_selection_skips_divider() {
        let entries = default_entries();
        let mut state = MenuState::new();
        state.open(&entries);
        assert_eq!(state.selected(), Some(0));

        state.select_next(&entries);
        assert_eq!(state.selected(), Some(1));
        state.select_next(&entries);
        assert_eq!(state.selected(), Some(3));
        state.select_next(&entries);
        assert_eq!(state.selected(), Some(0));

        state.select_previous(&entries);
        assert_eq!(state.selected(), Some(3));
        state.select_previous(&entries);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_toggle() {
        let entries = default_entries();
        let mut state = MenuState::new();
        state.toggle(&entries);
        assert!(state.is_open());
        state.toggle(&entries);
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_area_is_anchored_under_button() {
        let entries = default_entries();
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(70, 1, 8, 1);
        let area = Menu::new(&entries).area(anchor, bounds);
        assert_eq!(area.y, 2);
        assert_eq!(area.right(), 78);
        assert_eq!(area.height, 6);
    }

    #[test]
    fn test_render_lists_items() {
        let entries = default_entries();
        let mut state = MenuState::new();
        state.open(&entries);

        let area = Rect::new(0, 0, 14, 6);
        let mut buf = Buffer::empty(area);
        Menu::new(&entries).render(area, &mut buf, &mut state);

        let rows = rendered_rows(&buf);
        assert!(rows[1].contains("Item 1"));
        assert!(rows[2].contains("Item 2"));
        assert!(rows[3].contains("───"));
        assert!(rows[4].contains("Item 3"));
    }

    #[test]
    fn test_closed_menu_draws_nothing() {
        let entries = default_entries();
        let mut state = MenuState::new();
        let area = Rect::new(0, 0, 14, 6);
        let mut buf = Buffer::empty(area);
        Menu::new(&entries).render(area, &mut buf, &mut state);
        assert!(rendered_rows(&buf).iter().all(|r| r.trim().is_empty()));
    }
}
