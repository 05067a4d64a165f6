//! Application state composition.
//!
//! This module defines the top-level state for the TUI:
//!
//! ```text
//! AppState
//! ├── session: SessionState   (identity, error flag — the routed record)
//! ├── login: LoginFormState   (username/password fields, focus)
//! ├── quotes: QuoteCycle      (rotation cursor for the quotes panel)
//! └── housekeeping            (quit flag, in-flight counter, spinner, hint)
//! ```
//!
//! All mutation happens in the reducer (`update`); the runtime and the
//! render functions only read.

use foyer_core::config::Config;
use foyer_core::quotes::QuoteCycle;
use foyer_core::session::SessionState;

use crate::login::LoginFormState;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The session record every view derives from.
    pub session: SessionState,
    /// Login form fields and focus.
    pub login: LoginFormState,
    /// Quote rotation cursor (lives for the whole process).
    pub quotes: QuoteCycle,
    /// Number of authentication attempts currently in flight.
    ///
    /// Display-only: it drives the spinner and fast polling. Settlements
    /// are never gated on it.
    pub attempts_in_flight: usize,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Set after the first failed attempt; unlocks the login hint.
    pub hint_unlocked: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            session: SessionState::new(),
            login: LoginFormState::new(),
            quotes: QuoteCycle::new(),
            attempts_in_flight: 0,
            spinner_frame: 0,
            hint_unlocked: false,
            config,
        }
    }

    /// True while any attempt is pending settlement.
    pub fn attempt_pending(&self) -> bool {
        self.attempts_in_flight > 0
    }
}
