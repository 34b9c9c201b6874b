//! Screen trait and associated types.
//!
//! A screen owns its state, draws itself, and answers events with a
//! [`ScreenAction`] instead of touching the app directly. Fetches are requested
//! by returning a ticket; the app executes it and hands the outcome back.

use crate::config::Config;
use crate::pagination::FetchTicket;
use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources for rendering
pub struct RenderContext<'a> {
    pub config: &'a Config,
    /// Reference time for relative timestamps, fixed per frame
    pub now: DateTime<Utc>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }
}

/// Read-only resources for event handling
pub struct ScreenContext<'a> {
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing for the app to do
    #[default]
    None,
    /// Issue this page fetch
    Fetch(FetchTicket),
    /// Request to quit the application
    Quit,
}

impl From<Option<FetchTicket>> for ScreenAction {
    fn from(ticket: Option<FetchTicket>) -> Self {
        ticket.map_or(ScreenAction::None, ScreenAction::Fetch)
    }
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, single-letter bindings are treated as text.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called after every draw, once the layout of the frame is known
    ///
    /// Screens whose behaviour depends on rendered geometry react here.
    fn after_render(&mut self) -> ScreenAction {
        ScreenAction::None
    }

    /// Called when the screen is first shown
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    /// Called when the screen goes away
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
