//! Session state machine for the login flow.
//!
//! `SessionState` is the single record the rest of the UI derives from: the
//! currently logged-in identity (if any) and whether the most recently
//! settled attempt failed. It has exactly two transitions:
//!
//! - [`SessionState::begin_attempt`] the instant a login is submitted
//! - [`SessionState::settle`] when the asynchronous verdict arrives
//!
//! Overlapping attempts are legal. Settlements are applied unconditionally
//! in arrival order, so the final state reflects whichever attempt settled
//! last in time — last-settled-wins, not last-issued-wins. Nothing here
//! cancels or suppresses stale responses; callers must not add that without
//! revisiting the contract, because the UI relies on the current behavior.

use crate::auth::AuthResult;

/// The mutable session record. Fields are private: a single owner mutates
/// it through the two transition methods, everything else reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<String>,
    last_attempt_failed: bool,
}

impl SessionState {
    /// Anonymous state: no identity, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// The identity of the settled successful attempt, if any.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// True only when the most recently settled attempt failed and no later
    /// attempt has begun or settled since.
    pub fn last_attempt_failed(&self) -> bool {
        self.last_attempt_failed
    }

    /// Marks a new attempt as in flight.
    ///
    /// Synchronously clears both the identity and the error flag, so the UI
    /// stops showing a stale error or identity while the attempt is pending.
    pub fn begin_attempt(&mut self) {
        self.identity = None;
        self.last_attempt_failed = false;
    }

    /// Applies a settled verdict.
    ///
    /// Called once per attempt, in settlement order, without any staleness
    /// check (see module docs on the race policy).
    pub fn settle(&mut self, result: AuthResult) {
        match result {
            AuthResult::Success { identity } => {
                self.identity = Some(identity);
                self.last_attempt_failed = false;
            }
            AuthResult::Failure => {
                self.identity = None;
                self.last_attempt_failed = true;
            }
        }
    }
}
