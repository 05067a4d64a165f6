//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn an asynchronous authentication attempt.
    ///
    /// Fire-and-forget: the runtime spawns a task per effect and never
    /// cancels one. Multiple attempts may be in flight at once; each
    /// reports back through the inbox as `UiEvent::AttemptSettled`.
    Authenticate { username: String, password: String },
}
