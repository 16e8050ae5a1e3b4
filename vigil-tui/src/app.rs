use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use vigil_core::{AgentSummary, StatusBackend, VigilConfig};

use crate::poller::{PollOutcome, Poller};
use crate::theme::{Theme, ThemeManager};
use crate::ui::layout::MainLayout;

const FRAME_INTERVAL: Duration = Duration::from_millis(250);
const QUIT_SIGNAL_TIMEOUT: Duration = Duration::from_millis(250);

/// Observable dashboard states: Loading until the first fetch resolves,
/// Error when a fetch failed before any summary was ever held, Ready once
/// one has been.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    Loading,
    Error,
    Ready,
}

pub struct App {
    pub should_quit: bool,
    pub state: DashboardState,
    pub summary: Option<AgentSummary>,
    pub last_error: Option<String>,
    pub status_message: Option<String>,
    pub theme_manager: ThemeManager,
    pub animation_tick: u64,
    poll_interval: Duration,
    backend: Arc<dyn StatusBackend>,
    poller: Option<Poller>,
    updates: Option<mpsc::Receiver<PollOutcome>>,
    last_applied_seq: u64,
}

impl App {
    pub fn new(config: &VigilConfig, backend: Arc<dyn StatusBackend>) -> Self {
        Self {
            should_quit: false,
            state: DashboardState::Loading,
            summary: None,
            last_error: None,
            status_message: None,
            theme_manager: ThemeManager::new(&config.theme),
            animation_tick: 0,
            poll_interval: config.poll_interval(),
            backend,
            poller: None,
            updates: None,
            last_applied_seq: 0,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Fire-and-forget: rendering never waits on init.
        let init_backend = Arc::clone(&self.backend);
        tokio::spawn(async move {
            if let Err(e) = init_backend.init().await {
                warn!("backend init failed: {e}");
            }
        });

        let (poller, updates) = Poller::start(Arc::clone(&self.backend), self.poll_interval);
        self.poller = Some(poller);
        self.updates = Some(updates);

        loop {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.drain_updates();

            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            if event::poll(FRAME_INTERVAL)? {
                let evt = event::read()?;
                self.handle_event(evt);
            }

            if self.should_quit {
                break;
            }
        }

        self.shutdown().await;
        Ok(())
    }

    fn drain_updates(&mut self) {
        loop {
            let outcome = match self.updates.as_mut().map(|rx| rx.try_recv()) {
                Some(Ok(outcome)) => outcome,
                _ => break,
            };
            self.apply_outcome(outcome);
        }
    }

    /// Apply one fetch resolution. Outcomes older than the newest applied
    /// one are dropped, so a slow fetch can never overwrite a newer result.
    pub fn apply_outcome(&mut self, outcome: PollOutcome) {
        if outcome.seq <= self.last_applied_seq {
            debug!(seq = outcome.seq, "discarding stale poll outcome");
            return;
        }
        self.last_applied_seq = outcome.seq;

        match outcome.result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.state = DashboardState::Ready;
                self.last_error = None;
                self.status_message = None;
            }
            Err(e) => {
                warn!("summary fetch failed: {e}");
                self.last_error = Some(e.to_string());
                // With a prior summary the dashboard keeps showing it and
                // the footer carries the failure; without one there is
                // nothing to show but the error view.
                if self.summary.is_none() {
                    self.state = DashboardState::Error;
                }
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key.code, key.modifiers);
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    pub fn request_refresh(&mut self) {
        self.status_message = Some("Refreshing...".to_string());
        if let Some(poller) = &self.poller {
            poller.request_refresh();
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.status_message = Some(format!(
            "Theme: {}",
            self.theme_manager.current_theme_name()
        ));
    }

    async fn shutdown(&mut self) {
        // Stop polling first: resolutions landing after this point hit a
        // closed channel and are discarded, never applied to a torn-down
        // view.
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
        self.updates = None;

        // One-way quit signal; no acknowledgement is consumed.
        match tokio::time::timeout(QUIT_SIGNAL_TIMEOUT, self.backend.quit()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("backend quit signal failed: {e}"),
            Err(_) => debug!("backend quit signal still in flight at shutdown"),
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }
}
