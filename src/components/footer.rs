use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render key hints of the form `"keys: label | keys: label"`
    ///
    /// Returns the height used (1 for border, 1 for text).
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> u16 {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.border_style()));
            }

            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", keys), t.emphasis_style()));
                spans.push(Span::styled(label.to_string(), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Line::from(spans)).centered(), inner);

        2
    }
}
