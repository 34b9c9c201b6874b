//! The course outline list: search box, card list, dropdown menu.

use super::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::components::{Footer, Header};
use crate::config::Config;
use crate::keymap::Action;
use crate::pagination::{Completion, FetchOutcome, PaginationController};
use crate::utils::TextInput;
use crate::widgets::{
    default_entries, CardList, CardListState, Menu, MenuEntry, MenuState, Spinner, SpinnerWidget,
    TextInputWidget, TextInputWidgetExt, ToastManager,
};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use std::fmt::Write;
use tracing::debug;

const TITLE: &str = "Course Outlines";

/// Rows moved per mouse wheel notch
const WHEEL_STEP: isize = 3;

pub struct OutlinesScreen {
    controller: PaginationController,
    list: CardListState,
    search: TextInput,
    search_focused: bool,
    menu: MenuState,
    menu_entries: Vec<MenuEntry>,
    /// Where the menu button was last drawn
    menu_anchor: Rect,
    spinner: Spinner,
    toasts: ToastManager,
    /// The list geometry changed without a scroll event (resize, new page)
    geometry_dirty: bool,
}

impl OutlinesScreen {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: PaginationController::new(config.scroll_threshold),
            list: CardListState::new(),
            search: TextInput::new(),
            search_focused: false,
            menu: MenuState::new(),
            menu_entries: default_entries(),
            menu_anchor: Rect::default(),
            spinner: Spinner::new(),
            toasts: ToastManager::new(),
            geometry_dirty: false,
        }
    }

    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Expire toasts
    pub fn tick(&mut self) {
        self.toasts.tick();
    }

    /// Apply the outcome of a fetch this screen requested
    pub fn on_fetch_complete(&mut self, outcome: FetchOutcome) -> ScreenAction {
        match self.controller.complete(outcome) {
            Completion::Applied { page, .. } => {
                if page == 1 {
                    self.list.scroll_to_top();
                }
                self.geometry_dirty = true;
                ScreenAction::None
            }
            Completion::Failed { page, error } => {
                self.toasts
                    .error(format!("Couldn't load page {}: {}", page, error));
                ScreenAction::None
            }
            Completion::Superseded(ticket) => {
                self.list.scroll_to_top();
                ScreenAction::Fetch(ticket)
            }
            Completion::Discarded => ScreenAction::None,
        }
    }

    fn report_scroll(&mut self) -> ScreenAction {
        self.controller.on_scroll(self.list.metrics()).into()
    }

    fn scroll(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::MoveUp => self.list.scroll_by(-1),
            Action::MoveDown => self.list.scroll_by(1),
            Action::PageUp => self.list.page_up(),
            Action::PageDown => self.list.page_down(),
            Action::GoToTop => self.list.scroll_to_top(),
            Action::GoToEnd => self.list.scroll_to_bottom(),
            _ => return ScreenAction::None,
        };
        self.report_scroll()
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_STEP,
            MouseEventKind::ScrollUp => -WHEEL_STEP,
            _ => return ScreenAction::None,
        };
        self.list.scroll_by(delta);
        self.report_scroll()
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => {
                self.search_focused = false;
                let ticket = self.controller.submit_search(self.search.text());
                if ticket.is_some() {
                    self.list.scroll_to_top();
                } else if self.controller.is_loading() {
                    self.toasts.info("Search will run when the current page arrives");
                }
                ticket.into()
            }
            KeyCode::Esc => {
                self.search_focused = false;
                self.search =
                    TextInput::with_text(self.controller.requested_query().unwrap_or_default());
                ScreenAction::None
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenAction::Quit
            }
            code => {
                self.search.handle_key(code);
                ScreenAction::None
            }
        }
    }

    fn handle_menu_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::MoveUp => self.menu.select_previous(&self.menu_entries),
            Action::MoveDown => self.menu.select_next(&self.menu_entries),
            Action::Confirm => {
                if let Some(label) = self
                    .menu
                    .selected()
                    .and_then(|i| self.menu_entries.get(i))
                    .and_then(MenuEntry::label)
                {
                    debug!("Menu entry {:?} chosen", label);
                }
                self.menu.close();
            }
            Action::Cancel | Action::ToggleMenu => self.menu.close(),
            Action::Quit => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => self.scroll(action),
            Action::Search => {
                self.search_focused = true;
                self.search =
                    TextInput::with_text(self.controller.requested_query().unwrap_or_default());
                ScreenAction::None
            }
            Action::Refresh => {
                let ticket = self.controller.refresh();
                if ticket.is_some() {
                    self.list.scroll_to_top();
                }
                ticket.into()
            }
            Action::ToggleMenu => {
                self.menu.toggle(&self.menu_entries);
                ScreenAction::None
            }
            Action::Quit => ScreenAction::Quit,
            Action::Confirm | Action::Cancel => ScreenAction::None,
        }
    }

    fn status_text(&self) -> String {
        let count = self.controller.items().len();
        let mut status = format!(
            "{} outline{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        if let Some(query) = self.controller.query() {
            let _ = write!(status, " matching \"{}\"", query);
        }
        if self.controller.state().is_idle() {
            status.push_str(" · all loaded");
        }
        status
    }

    fn footer_text(&self, config: &Config) -> String {
        if self.search_focused {
            config.keymap.footer_search()
        } else if self.menu.is_open() {
            config.keymap.footer_menu()
        } else {
            config.keymap.footer_list()
        }
    }

    fn empty_message(&self, config: &Config) -> Option<String> {
        let state = self.controller.state();
        if state.is_loading() {
            None
        } else if state.is_idle() {
            Some("No outlines found".to_string())
        } else {
            Some(format!(
                "Nothing loaded yet. Press {} to retry",
                config.keymap.get_key_display_for_action(Action::Refresh)
            ))
        }
    }
}

impl Screen for OutlinesScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let loading = self.controller.is_loading();
        let [header_area, search_area, list_area, spinner_area, footer_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(u16::from(loading)),
                Constraint::Length(2),
            ])
            .areas(area);

        self.menu_anchor = Header::render(
            frame,
            header_area,
            TITLE,
            &self.status_text(),
            self.menu.is_open(),
        );

        let search = TextInputWidget::new(&self.search)
            .title("Search")
            .placeholder("Press / to search by name")
            .focused(self.search_focused);
        frame.render_text_input_widget(search, search_area);

        let empty_message = self.empty_message(ctx.config);
        let mut cards = CardList::new(self.controller.items(), ctx.now);
        if let Some(message) = empty_message.as_deref() {
            cards = cards.empty_message(message);
        }
        let before = self.list.metrics();
        frame.render_stateful_widget(cards, list_area, &mut self.list);
        if self.list.metrics().viewport_height != before.viewport_height {
            self.geometry_dirty = true;
        }

        if loading {
            let label = format!("Loading page {}…", self.controller.page());
            frame.render_widget(SpinnerWidget::new(&self.spinner, label), spinner_area);
        }

        Footer::render(frame, footer_area, &self.footer_text(ctx.config));

        if self.menu.is_open() {
            let menu = Menu::new(&self.menu_entries);
            let menu_area = menu.area(self.menu_anchor, area);
            frame.render_stateful_widget(menu, menu_area, &mut self.menu);
        }

        self.toasts.render(frame, area);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.search_focused {
                    self.handle_search_key(key)
                } else {
                    match ctx.config.keymap.get_action(key.code, key.modifiers) {
                        Some(action) if self.menu.is_open() => self.handle_menu_action(action),
                        Some(action) => self.handle_action(action),
                        None => ScreenAction::None,
                    }
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => {
                self.geometry_dirty = true;
                ScreenAction::None
            }
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        self.search_focused
    }

    fn after_render(&mut self) -> ScreenAction {
        if !std::mem::take(&mut self.geometry_dirty) {
            return ScreenAction::None;
        }
        self.report_scroll()
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(self.controller.start().into())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.controller.teardown();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Credit, FetchError, OutlineRecord, Page, PageRequest};
    use crate::pagination::{FetchTicket, PageState};
    use chrono::Utc;
    use crossterm::event::{KeyEventState, MouseButton};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn wheel(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn outline_page(ids: std::ops::RangeInclusive<u64>, has_next: bool) -> crate::api::OutlinePage {
        Page {
            count: None,
            next: has_next.then(|| "next".to_string()),
            previous: None,
            results: ids
                .map(|id| OutlineRecord {
                    id,
                    name: format!("Outline {}", id),
                    image: None,
                    credit: Credit::Integer(3),
                    overview: "<p>About</p>".to_string(),
                    created_date: None,
                })
                .collect(),
        }
    }

    fn fetch_ticket(action: ScreenAction) -> FetchTicket {
        match action {
            ScreenAction::Fetch(ticket) => ticket,
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    fn draw(screen: &mut OutlinesScreen, config: &Config, terminal: &mut Terminal<TestBackend>) {
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(config, Utc::now());
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn mounted(config: &Config) -> (OutlinesScreen, FetchTicket) {
        let mut screen = OutlinesScreen::new(config);
        let ticket = fetch_ticket(screen.on_enter(&ScreenContext::new(config)).unwrap());
        (screen, ticket)
    }

    #[test]
    fn test_enter_requests_first_page() {
        let config = Config::default();
        let (screen, ticket) = mounted(&config);
        assert_eq!(ticket.request, PageRequest::new(1));
        assert!(screen.controller().is_loading());
    }

    #[test]
    fn test_scrolling_near_bottom_requests_next_page() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let (mut screen, ticket) = mounted(&config);

        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=10, true))));
        draw(&mut screen, &config, &mut terminal);
        // 70 rows of cards in a 32-row viewport: not near the bottom yet
        assert_eq!(screen.after_render(), ScreenAction::None);

        let action = screen.handle_event(key(KeyCode::End), &ctx).unwrap();
        let next = fetch_ticket(action);
        assert_eq!(next.request.page, 2);

        // Further scrolling while loading never issues a second fetch
        let action = screen
            .handle_event(wheel(MouseEventKind::ScrollDown), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::None);
    }

    #[test]
    fn test_short_first_page_fills_viewport() {
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let (mut screen, ticket) = mounted(&config);

        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=2, true))));
        draw(&mut screen, &config, &mut terminal);

        let next = fetch_ticket(screen.after_render());
        assert_eq!(next.request.page, 2);
    }

    #[test]
    fn test_render_shows_cards_and_spinner() {
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut screen, ticket) = mounted(&config);

        draw(&mut screen, &config, &mut terminal);
        let text = screen_text(&terminal);
        assert!(text.contains("Course Outlines"));
        assert!(text.contains("Loading page 1"));

        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=3, false))));
        draw(&mut screen, &config, &mut terminal);
        let text = screen_text(&terminal);
        assert!(text.contains("Outline 1"));
        assert!(text.contains("Credit: 3"));
        assert!(text.contains("Overview: About"));
        assert!(text.contains("all loaded"));
        assert!(!text.contains("Loading page"));
    }

    #[test]
    fn test_failure_shows_toast_and_keeps_state() {
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut screen, ticket) = mounted(&config);

        let action =
            screen.on_fetch_complete(FetchOutcome::new(&ticket, Err(FetchError::Interrupted)));
        assert_eq!(action, ScreenAction::None);
        assert_eq!(screen.controller().state(), PageState::FIRST);
        assert!(screen.toasts().current().is_some());

        draw(&mut screen, &config, &mut terminal);
        let text = screen_text(&terminal);
        assert!(text.contains("Couldn't load page 1"));
        assert!(text.contains("Press R to retry"));
    }

    #[test]
    fn test_search_submits_query() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, ticket) = mounted(&config);
        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=3, true))));

        screen.handle_event(key(KeyCode::Char('/')), &ctx).unwrap();
        assert!(screen.is_input_focused());
        // 'q' is text while searching, not quit
        for c in "sql".chars() {
            let action = screen.handle_event(key(KeyCode::Char(c)), &ctx).unwrap();
            assert_eq!(action, ScreenAction::None);
        }

        let ticket = fetch_ticket(screen.handle_event(key(KeyCode::Enter), &ctx).unwrap());
        assert_eq!(ticket.request.page, 1);
        assert_eq!(ticket.request.query.as_deref(), Some("sql"));
        assert!(!screen.is_input_focused());
    }

    #[test]
    fn test_failed_search_keeps_status() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut screen, ticket) = mounted(&config);
        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=1, true))));
        assert_eq!(screen.status_text(), "1 outline");

        screen.handle_event(key(KeyCode::Char('/')), &ctx).unwrap();
        for c in "calculus".chars() {
            screen.handle_event(key(KeyCode::Char(c)), &ctx).unwrap();
        }
        let ticket = fetch_ticket(screen.handle_event(key(KeyCode::Enter), &ctx).unwrap());
        screen.on_fetch_complete(FetchOutcome::new(&ticket, Err(FetchError::Interrupted)));

        assert_eq!(screen.status_text(), "1 outline");
        assert_eq!(screen.controller().query(), None);
        let ids: Vec<u64> = screen.controller().items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);

        draw(&mut screen, &config, &mut terminal);
        assert!(!screen_text(&terminal).contains("matching"));

        // Reopening the search box offers the query that failed, ready to retry
        screen.handle_event(key(KeyCode::Char('/')), &ctx).unwrap();
        assert_eq!(screen.search.text(), "calculus");
    }

    #[test]
    fn test_search_cancel_restores_query() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, _ticket) = mounted(&config);

        screen.handle_event(key(KeyCode::Char('/')), &ctx).unwrap();
        screen.handle_event(key(KeyCode::Char('x')), &ctx).unwrap();
        let action = screen.handle_event(key(KeyCode::Esc), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);
        assert!(!screen.is_input_focused());
        assert_eq!(screen.search.text(), "");
    }

    #[test]
    fn test_search_while_loading_is_deferred() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, first) = mounted(&config);

        screen.handle_event(key(KeyCode::Char('/')), &ctx).unwrap();
        screen.handle_event(key(KeyCode::Char('a')), &ctx).unwrap();
        let action = screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert_eq!(action, ScreenAction::None);

        let action =
            screen.on_fetch_complete(FetchOutcome::new(&first, Ok(outline_page(1..=3, true))));
        let ticket = fetch_ticket(action);
        assert_eq!(ticket.request.query.as_deref(), Some("a"));
        assert!(screen.controller().items().is_empty());
    }

    #[test]
    fn test_menu_toggle_and_navigation() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let (mut screen, _ticket) = mounted(&config);

        screen.handle_event(key(KeyCode::Char('m')), &ctx).unwrap();
        assert!(screen.menu.is_open());

        draw(&mut screen, &config, &mut terminal);
        let text = screen_text(&terminal);
        assert!(text.contains("Item 1"));
        assert!(text.contains("Item 3"));

        // Navigation keys move the highlight instead of scrolling
        screen.handle_event(key(KeyCode::Down), &ctx).unwrap();
        assert_eq!(screen.menu.selected(), Some(1));
        assert_eq!(screen.list.offset(), 0);

        screen.handle_event(key(KeyCode::Enter), &ctx).unwrap();
        assert!(!screen.menu.is_open());
    }

    #[test]
    fn test_quit_and_teardown() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, ticket) = mounted(&config);

        let action = screen.handle_event(key(KeyCode::Char('q')), &ctx).unwrap();
        assert_eq!(action, ScreenAction::Quit);

        screen.on_exit(&ctx).unwrap();
        screen.on_fetch_complete(FetchOutcome::new(&ticket, Ok(outline_page(1..=3, true))));
        assert!(screen.controller().items().is_empty());
    }

    #[test]
    fn test_ignores_mouse_clicks() {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let (mut screen, _ticket) = mounted(&config);
        let action = screen
            .handle_event(wheel(MouseEventKind::Down(MouseButton::Left)), &ctx)
            .unwrap();
        assert_eq!(action, ScreenAction::None);
    }
}
