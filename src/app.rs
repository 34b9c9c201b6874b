use crate::api::OutlineSource;
use crate::config::Config;
use crate::screens::{OutlinesScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{FetchHandle, FetchService};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{info, warn};

/// Event poll timeout while idle
const IDLE_TICK: Duration = Duration::from_millis(250);
/// Event poll timeout while the spinner is animating
const BUSY_TICK: Duration = Duration::from_millis(80);

/// Main application state
pub struct App<S: OutlineSource> {
    config: Config,
    tui: Tui,
    runtime: Runtime,
    source: Arc<S>,
    screen: OutlinesScreen,
    /// The one fetch allowed in flight
    pending: Option<FetchHandle>,
    should_quit: bool,
}

impl<S: OutlineSource> App<S> {
    pub fn new(config: Config, source: S) -> Result<Self> {
        let no_color = std::env::var("NO_COLOR").ok();
        init_theme(ThemeType::resolve(&config.theme, no_color.as_deref()));

        let tui = Tui::new()?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let screen = OutlinesScreen::new(&config);

        Ok(Self {
            config,
            tui,
            runtime,
            source: Arc::new(source),
            screen,
            pending: None,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("UI started");

        let action = self.screen.on_enter(&ScreenContext::new(&self.config))?;
        self.apply(action);

        let result = self.event_loop();

        // Outstanding results are dropped from here on
        self.screen.on_exit(&ScreenContext::new(&self.config))?;
        self.pending = None;
        self.tui.exit()?;
        info!("UI stopped");

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.poll_fetch();
            self.screen.tick();
            self.draw()?;

            if self.should_quit {
                return Ok(());
            }

            let timeout = if self.screen.controller().is_loading() {
                BUSY_TICK
            } else {
                IDLE_TICK
            };

            if let Some(event) = self.tui.poll_event(timeout)? {
                let action = self
                    .screen
                    .handle_event(event, &ScreenContext::new(&self.config))?;
                self.apply(action);
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let now = Utc::now();
        let config = &self.config;
        let screen = &mut self.screen;
        let mut rendered = Ok(());

        self.tui
            .terminal_mut()
            .draw(|frame| {
                let ctx = RenderContext::new(config, now);
                rendered = screen.render(frame, frame.area(), &ctx);
            })
            .context("Failed to draw frame")?;
        rendered?;

        let action = self.screen.after_render();
        self.apply(action);
        Ok(())
    }

    /// Hand a finished fetch back to the screen
    fn poll_fetch(&mut self) {
        let Some(handle) = self.pending.as_mut() else {
            return;
        };
        let Some(outcome) = handle.try_recv() else {
            return;
        };
        self.pending = None;

        let action = self.screen.on_fetch_complete(outcome);
        self.apply(action);
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Fetch(ticket) => {
                if let Some(previous) = self.pending.take() {
                    warn!(
                        "Replacing in-flight fetch for page {}",
                        previous.ticket().request.page
                    );
                }
                self.pending = Some(FetchService::start(
                    self.runtime.handle(),
                    Arc::clone(&self.source),
                    ticket,
                ));
            }
            ScreenAction::Quit => self.should_quit = true,
        }
    }
}
