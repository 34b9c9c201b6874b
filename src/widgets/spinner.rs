//! Activity indicator shown while a page is loading.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use std::time::{Duration, Instant};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_DURATION: Duration = Duration::from_millis(80);

/// Braille spinner whose frame is derived from elapsed time
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    started: Instant,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Frame index for a given elapsed time
    pub fn frame_at(elapsed: Duration) -> usize {
        let ticks = elapsed.as_millis() / FRAME_DURATION.as_millis();
        usize::try_from(ticks % FRAMES.len() as u128).unwrap_or(0)
    }

    pub fn symbol(&self) -> &'static str {
        FRAMES[Self::frame_at(self.started.elapsed())]
    }
}

/// One-line "⠋ Loading page N…" indicator
pub struct SpinnerWidget<'a> {
    spinner: &'a Spinner,
    label: String,
}

impl<'a> SpinnerWidget<'a> {
    pub fn new(spinner: &'a Spinner, label: impl Into<String>) -> Self {
        Self {
            spinner,
            label: label.into(),
        }
    }
}

impl Widget for SpinnerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        Line::from(vec![
            Span::styled(self.spinner.symbol(), t.emphasis_style()),
            Span::raw(" "),
            Span::styled(self.label, t.muted_style()),
        ])
        .centered()
        .render(area, buf);
    }
}
