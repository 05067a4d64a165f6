//! UI event types.
//!
//! Events are the reducer's only input. Terminal events come from
//! crossterm; `AttemptSettled` arrives through the runtime inbox when an
//! authentication task resolves. The inbox is drained in arrival order, so
//! settlement order and application order are the same thing.

use foyer_core::auth::AuthResult;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (animation, render cadence).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An authentication attempt settled with its verdict.
    ///
    /// Carries no attempt identity on purpose: the session contract is
    /// last-settled-wins, so every settlement is applied unconditionally.
    AttemptSettled { result: AuthResult },
}
