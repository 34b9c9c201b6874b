use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Label of the dropdown toggle drawn at the right of the header
const MENU_BUTTON: &str = " Menu ▾ ";

/// Common header component
pub struct Header;

impl Header {
    /// Render the header: centered title, status text on the left, and the
    /// menu button on the right
    ///
    /// Returns the area of the menu button so the dropdown can anchor to it.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        status: &str,
        menu_open: bool,
    ) -> Rect {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style())
            .title(Line::styled(format!(" {} ", title), t.title_style()).centered());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let button_width = u16::try_from(MENU_BUTTON.chars().count()).unwrap_or(0);
        let [status_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)])
                .areas(inner);

        frame.render_widget(
            Paragraph::new(status).style(t.muted_style()),
            status_area,
        );

        let button_style = if menu_open {
            t.highlight_style()
        } else {
            t.emphasis_style()
        };
        frame.render_widget(
            Paragraph::new(MENU_BUTTON).style(button_style),
            button_area,
        );

        button_area
    }
}
