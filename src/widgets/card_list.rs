//! Row-scrolled list of outline cards.
//!
//! Cards have a fixed height, so the content height and the visible slice are
//! known without laying anything out. Scrolling is per row: a card cut by the
//! viewport edge is drawn partially.

use super::outline_card::{OutlineCard, CARD_HEIGHT};
use crate::api::OutlineRecord;
use crate::pagination::ScrollMetrics;
use crate::styles::theme;
use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{StatefulWidget, Widget};

/// Scroll position and the geometry of the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardListState {
    offset: usize,
    viewport_height: usize,
    content_height: usize,
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Record the list geometry; keeps the offset in range
    pub fn set_geometry(&mut self, viewport_height: usize, item_count: usize) {
        self.viewport_height = viewport_height;
        self.content_height = item_count * usize::from(CARD_HEIGHT);
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.viewport_height, self.offset, self.content_height)
    }

    fn max_offset(&self) -> usize {
        self.metrics().max_offset()
    }

    /// Scroll by `delta` rows (negative is up). Returns whether the offset moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target)
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_by(isize::try_from(self.viewport_height.max(1)).unwrap_or(isize::MAX))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-isize::try_from(self.viewport_height.max(1)).unwrap_or(isize::MAX))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_to(usize::MAX)
    }

    fn scroll_to(&mut self, offset: usize) -> bool {
        let offset = offset.min(self.max_offset());
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }
}

/// Stateful widget drawing the visible slice of the cards
pub struct CardList<'a> {
    records: &'a [OutlineRecord],
    now: DateTime<Utc>,
    empty_message: Option<&'a str>,
}

impl<'a> CardList<'a> {
    pub fn new(records: &'a [OutlineRecord], now: DateTime<Utc>) -> Self {
        Self {
            records,
            now,
            empty_message: None,
        }
    }

    /// Text shown centered when there are no records
    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = Some(message);
        self
    }
}

impl StatefulWidget for CardList<'_> {
    type State = CardListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.set_geometry(usize::from(area.height), self.records.len());

        if self.records.is_empty() {
            if let Some(message) = self.empty_message {
                let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1u16.min(area.height));
                Line::styled(message, theme().muted_style())
                    .centered()
                    .render(row, buf);
            }
            return;
        }

        let card_height = usize::from(CARD_HEIGHT);
        let top = state.offset;
        let bottom = top + usize::from(area.height);
        let first = top / card_height;

        let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, CARD_HEIGHT));

        for (index, record) in self.records.iter().enumerate().skip(first) {
            let card_top = index * card_height;
            if card_top >= bottom {
                break;
            }

            scratch.reset();
            OutlineCard::new(record, self.now).render(scratch.area, &mut scratch);

            for card_row in 0..CARD_HEIGHT {
                let row = card_top + usize::from(card_row);
                if row < top || row >= bottom {
                    continue;
                }
                // row - top < area.height, so this fits in u16
                let y = area.y + u16::try_from(row - top).unwrap_or(u16::MAX);
                for x in 0..area.width {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((x, card_row)), buf.cell_mut((area.x + x, y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}
