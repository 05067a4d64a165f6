//! TUI runtime, owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Authentication attempts run as spawned tasks that report back through a
//! single unbounded inbox channel. The loop drains the inbox every frame and
//! feeds each settlement to the reducer in arrival order. The inbox is never
//! filtered, so the session always ends up reflecting the attempt that
//! settled last.

use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use foyer_core::auth::Authenticator;
use foyer_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while an attempt is in flight (spinner animation).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(33);

/// Poll duration when idle (no attempt in flight).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is guaranteed to be restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (separate from terminal for borrow-checker friendly rendering).
    pub state: AppState,
    /// Verdict source for spawned attempts.
    authenticator: Arc<dyn Authenticator>,
    /// Inbox for settlements from spawned attempt tasks.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// Enters the alternate screen and enables raw mode; terminal state is
    /// restored when the runtime is dropped.
    pub fn new(config: Config, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(config),
            authenticator,
            inbox_tx,
            inbox_rx,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Tick only redraws while the spinner is visible; everything
                // else (keys, settlements) always redraws.
                let marks_dirty = match &event {
                    UiEvent::Tick => self.state.attempt_pending(),
                    _ => true,
                };
                let effects = update::update(&mut self.state, event);
                if marks_dirty || !effects.is_empty() {
                    dirty = true;
                }
                for effect in effects {
                    self.execute_effect(effect);
                }
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from all sources (inbox, terminal, tick).
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Always emit a tick for animation
        events.push(UiEvent::Tick);

        // Drain settled attempts in arrival order
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let poll_duration = if self.state.attempt_pending() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Poll terminal events with appropriate timeout.
        // Batch ALL available events to avoid one-event-per-frame lag.
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        Ok(events)
    }

    /// Executes a single effect returned by the reducer.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Authenticate { username, password } => {
                self.spawn_attempt(username, password);
            }
        }
    }

    /// Spawns a fire-and-forget authentication attempt.
    ///
    /// The task runs to completion regardless of what the user does in the
    /// meantime; its verdict lands in the inbox whenever it settles.
    fn spawn_attempt(&self, username: String, password: String) {
        let authenticator = Arc::clone(&self.authenticator);
        let inbox_tx = self.inbox_tx.clone();

        tokio::spawn(async move {
            let result = authenticator.authenticate(&username, &password).await;
            // Receiver gone means the runtime is shutting down.
            let _ = inbox_tx.send(UiEvent::AttemptSettled { result });
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
