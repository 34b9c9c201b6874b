//! Text input widget for rendering a [`TextInput`].
//!
//! Draws a rounded, titled box with placeholder text when empty. When the text
//! is wider than the box, it scrolls horizontally so the cursor stays visible.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                t.border_focused_style()
            } else {
                t.border_style()
            });
        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// First visible character so the cursor fits in `width` columns
    fn scroll_start(&self, width: usize) -> usize {
        let cursor = self.input.cursor();
        if width == 0 {
            return cursor;
        }
        (cursor + 1).saturating_sub(width)
    }

    /// Cursor cell for the given outer area
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let width = usize::from(inner.width);
        let column = self.input.cursor() - self.scroll_start(width);
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        Position::new(
            inner.x + column.min(inner.width.saturating_sub(1)),
            inner.y,
        )
    }

    fn visible_text(&self, width: usize) -> String {
        self.input
            .text()
            .chars()
            .skip(self.scroll_start(width))
            .take(width)
            .collect()
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let block = self.block();
        let inner = block.inner(area);

        let paragraph = if self.input.text().is_empty() {
            Paragraph::new(self.placeholder.unwrap_or_default()).style(t.placeholder_style())
        } else {
            Paragraph::new(self.visible_text(usize::from(inner.width))).style(t.text_style())
        };

        paragraph.block(block).render(area, buf);
    }
}

/// Render a [`TextInputWidget`] and place the terminal cursor when focused
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.focused.then(|| widget.cursor_position(area));
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = TextInput::new();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        TextInputWidget::new(&input)
            .title("Search")
            .placeholder("Type to search")
            .render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Search"));
        assert!(row_text(&buf, 1).contains("Type to search"));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let input = TextInput::with_text("abcdefghijklmnopqrstuvwxyz");
        let area = Rect::new(0, 0, 12, 3);
        let widget = TextInputWidget::new(&input).focused(true);

        // 10 inner columns; cursor sits after 'z'
        assert_eq!(widget.visible_text(10), "rstuvwxyz");
        let position = widget.cursor_position(area);
        assert_eq!(position, Position::new(10, 1));
    }

    #[test]
    fn test_short_text_cursor() {
        let input = TextInput::with_text("abc");
        let widget = TextInputWidget::new(&input).focused(true);
        assert_eq!(widget.visible_text(10), "abc");
        assert_eq!(widget.cursor_position(Rect::new(5, 2, 12, 3)), Position::new(9, 3));
    }
}
