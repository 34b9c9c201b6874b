//! Card view for a single course outline.

use crate::api::OutlineRecord;
use crate::styles::theme;
use crate::utils::{relative_time, strip_html, truncate};
use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Rows a card occupies in the list, including the gap below it
pub const CARD_HEIGHT: u16 = 7;

/// Rows of the bordered card itself
const CARD_BODY_HEIGHT: u16 = CARD_HEIGHT - 1;

/// Renders one record as a bordered card:
///
/// ```text
/// ╭ Data Structures ──────────────────────╮
/// │Image: https://res.cloudinary.com/…    │
/// │Credit: 3                              │
/// │Overview: Lists, trees & graphs        │
/// │3 days ago                             │
/// ╰───────────────────────────────────────╯
/// ```
pub struct OutlineCard<'a> {
    record: &'a OutlineRecord,
    now: DateTime<Utc>,
}

impl<'a> OutlineCard<'a> {
    pub fn new(record: &'a OutlineRecord, now: DateTime<Utc>) -> Self {
        Self { record, now }
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let t = theme();
        let record = self.record;

        let image = record
            .image
            .as_deref()
            .filter(|uri| !uri.trim().is_empty())
            .unwrap_or("(no image)");
        let credit = record.credit.to_string();
        let overview = strip_html(&record.overview);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Image: ", t.muted_style()),
                Span::styled(
                    truncate(image, width.saturating_sub(7)),
                    t.muted_style(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Credit: ", t.text_style()),
                Span::styled(credit, t.accent_style()),
            ]),
            Line::from(vec![
                Span::styled("Overview: ", t.text_style()),
                Span::styled(
                    truncate(&overview, width.saturating_sub(10)),
                    t.text_style(),
                ),
            ]),
        ];

        if let Some(created) = record.created_date {
            lines.push(Line::styled(relative_time(created, self.now), t.muted_style()));
        }

        lines
    }
}

impl Widget for OutlineCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let area = Rect {
            height: area.height.min(CARD_BODY_HEIGHT),
            ..area
        };

        let title_width = usize::from(area.width.saturating_sub(4));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(Span::styled(
                format!(" {} ", truncate(&self.record.name, title_width)),
                t.title_style(),
            ));

        let inner_width = usize::from(block.inner(area).width);
        Paragraph::new(self.lines(inner_width))
            .block(block)
            .render(area, buf);
    }
}
