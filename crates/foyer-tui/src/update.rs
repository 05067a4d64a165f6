//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state — in particular for the login contract:
//!
//! - a submission synchronously clears the session (identity and error)
//!   before the asynchronous verdict can possibly settle
//! - settlements are applied unconditionally in arrival order, so the
//!   session reflects whichever in-flight attempt settled last

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::router::{View, route};
use crate::state::AppState;
use crate::{login, quotes};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation; nothing else changes, so a bare
            // re-render never alters what the router sees.
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::AttemptSettled { result } => {
            app.attempts_in_flight = app.attempts_in_flight.saturating_sub(1);
            if !result.succeeded() {
                app.hint_unlocked = true;
            }
            app.session.settle(result);
            vec![]
        }
    }
}

/// Route discriminant without the borrowed identity, so key handlers can
/// take `&mut` pieces of the app while dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveView {
    Login,
    Admin,
    Quotes,
}

fn active_view(app: &AppState) -> ActiveView {
    match route(&app.session) {
        View::Quotes => ActiveView::Quotes,
        View::Admin { .. } => ActiveView::Admin,
        View::Login { .. } => ActiveView::Login,
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        // Resize is handled implicitly: the next render lays out against
        // the new frame area.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from every view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    match active_view(app) {
        ActiveView::Login => match login::handle_key(&mut app.login, key) {
            login::LoginKeyResult::Submit { username, password } => {
                // Visible immediately: the form stops showing a previous
                // error or identity while the new attempt is pending.
                app.session.begin_attempt();
                app.attempts_in_flight += 1;
                vec![UiEffect::Authenticate { username, password }]
            }
            login::LoginKeyResult::Handled => vec![],
        },
        ActiveView::Admin => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
            _ => vec![],
        },
        ActiveView::Quotes => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => vec![UiEffect::Quit],
            _ => {
                quotes::handle_key(&mut app.quotes, key);
                vec![]
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use foyer_core::auth::AuthResult;
    use foyer_core::config::Config;
    use foyer_core::quotes::QUOTES;

    use super::*;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn key(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(app, UiEvent::Terminal(Event::Key(KeyEvent::from(code))))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn submit(app: &mut AppState, username: &str, password: &str) -> Vec<UiEffect> {
        app.login.username = username.to_string();
        app.login.password = password.to_string();
        key(app, KeyCode::Enter)
    }

    fn settle(app: &mut AppState, result: AuthResult) {
        let effects = update(app, UiEvent::AttemptSettled { result });
        assert!(effects.is_empty());
    }

    fn success(identity: &str) -> AuthResult {
        AuthResult::Success {
            identity: identity.to_string(),
        }
    }

    #[test]
    fn test_submission_spawns_attempt_and_clears_session() {
        let mut app = app();
        let effects = submit(&mut app, "admin", "admin");

        assert_eq!(
            effects,
            vec![UiEffect::Authenticate {
                username: "admin".to_string(),
                password: "admin".to_string(),
            }]
        );
        // Cleared before settlement, not after.
        assert_eq!(app.session.identity(), None);
        assert!(!app.session.last_attempt_failed());
        assert_eq!(app.attempts_in_flight, 1);
    }

    #[test]
    fn test_submission_clears_previous_error_immediately() {
        let mut app = app();
        submit(&mut app, "admin", "wrong");
        settle(&mut app, AuthResult::Failure);
        assert!(app.session.last_attempt_failed());

        submit(&mut app, "admin", "admin");
        assert!(!app.session.last_attempt_failed());
        assert_eq!(app.session.identity(), None);
    }

    #[test]
    fn test_success_routes_to_admin() {
        let mut app = app();
        submit(&mut app, "admin", "admin");
        settle(&mut app, success("admin"));

        assert_eq!(app.session.identity(), Some("admin"));
        assert_eq!(app.attempts_in_flight, 0);
        assert_eq!(route(&app.session), View::Admin { identity: "admin" });
    }

    #[test]
    fn test_kent_routes_to_quotes() {
        let mut app = app();
        submit(&mut app, "kent", "kent");
        settle(&mut app, success("kent"));
        assert_eq!(route(&app.session), View::Quotes);
    }

    #[test]
    fn test_failure_sets_error_and_unlocks_hint() {
        let mut app = app();
        assert!(!app.hint_unlocked);

        submit(&mut app, "admin", "wrong");
        settle(&mut app, AuthResult::Failure);

        assert!(app.session.last_attempt_failed());
        assert!(app.hint_unlocked);
        assert_eq!(
            route(&app.session),
            View::Login {
                attempt_failed: true
            }
        );
    }

    #[test]
    fn test_failure_after_success_drops_stale_identity() {
        let mut app = app();
        submit(&mut app, "admin", "admin");
        settle(&mut app, success("admin"));

        // Logged-in views don't have a form, so drive the session the way
        // the runtime would on a late settlement.
        submit_is_unreachable_from_admin(&app);
        settle(&mut app, AuthResult::Failure);

        assert_eq!(app.session.identity(), None);
        assert!(app.session.last_attempt_failed());
    }

    fn submit_is_unreachable_from_admin(app: &AppState) {
        assert_eq!(active_view(app), ActiveView::Admin);
    }

    #[test]
    fn test_last_settled_wins_with_overlapping_attempts() {
        let mut app = app();
        submit(&mut app, "admin", "wrong");
        // Re-entrant submit while the first attempt is still in flight:
        // routing is still Login, so the form keeps working.
        submit(&mut app, "admin", "admin");
        assert_eq!(app.attempts_in_flight, 2);

        // The second-issued attempt settles first; the first-issued one
        // settles last and wins.
        settle(&mut app, success("admin"));
        settle(&mut app, AuthResult::Failure);

        assert_eq!(app.session.identity(), None);
        assert!(app.session.last_attempt_failed());
        assert_eq!(app.attempts_in_flight, 0);
    }

    #[test]
    fn test_tick_does_not_touch_session() {
        let mut app = app();
        submit(&mut app, "kent", "kent");
        settle(&mut app, success("kent"));

        let before = app.session.clone();
        for _ in 0..10 {
            assert!(update(&mut app, UiEvent::Tick).is_empty());
        }
        assert_eq!(app.session, before);
    }

    #[test]
    fn test_typing_reaches_the_focused_field() {
        let mut app = app();
        type_text(&mut app, "kent");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");

        assert_eq!(app.login.username, "kent");
        assert_eq!(app.login.password, "secret");
    }

    #[test]
    fn test_quotes_keys_rotate_only_on_quotes_view() {
        let mut app = app();
        // On the login view, 'n' is text input, not rotation.
        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.quotes.current(), QUOTES[0]);
        assert_eq!(app.login.username, "n");

        submit(&mut app, "kent", "kent");
        settle(&mut app, success("kent"));
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.quotes.current(), QUOTES[1]);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_view() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(ctrl_c)));
        assert_eq!(effects, vec![UiEffect::Quit]);

        submit(&mut app, "kent", "kent");
        settle(&mut app, success("kent"));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let effects = update(&mut app, UiEvent::Terminal(Event::Key(ctrl_c)));
        assert_eq!(effects, vec![UiEffect::Quit]);
    }

    #[test]
    fn test_q_quits_logged_in_views_but_types_on_login() {
        let mut app = app();
        assert!(key(&mut app, KeyCode::Char('q')).is_empty());
        assert_eq!(app.login.username, "q");

        app.login.username.clear();
        submit(&mut app, "admin", "admin");
        settle(&mut app, success("admin"));
        assert_eq!(key(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);
    }
}
