/// Geometry of the scrollable list at the moment of a scroll event.
///
/// All values are in the same distance unit (terminal rows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Height of the visible window
    pub viewport_height: usize,
    /// Distance scrolled from the top of the content
    pub offset: usize,
    /// Total height of the content
    pub content_height: usize,
}

impl ScrollMetrics {
    pub fn new(viewport_height: usize, offset: usize, content_height: usize) -> Self {
        Self {
            viewport_height,
            offset,
            content_height,
        }
    }

    /// Whether the bottom of the viewport is within `threshold` of the content's end
    pub fn is_close_to_bottom(&self, threshold: u16) -> bool {
        self.viewport_height + self.offset
            >= self.content_height.saturating_sub(usize::from(threshold))
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }
}
