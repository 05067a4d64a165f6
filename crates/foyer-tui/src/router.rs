//! View routing.
//!
//! A pure, total function from session state to the view to display. The
//! render path re-invokes it every frame; it never mutates anything.

use foyer_core::auth::QUOTES_IDENTITY;
use foyer_core::session::SessionState;

/// The three mutually exclusive views of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// The quotes panel, reserved for the distinguished identity.
    Quotes,
    /// The admin panel for any other logged-in identity.
    Admin { identity: &'a str },
    /// The login form, with the error flag of the last settled attempt.
    Login { attempt_failed: bool },
}

/// Maps session state to a view.
pub fn route(session: &SessionState) -> View<'_> {
    match session.identity() {
        Some(identity) if identity == QUOTES_IDENTITY => View::Quotes,
        Some(identity) => View::Admin { identity },
        None => View::Login {
            attempt_failed: session.last_attempt_failed(),
        },
    }
}

#[cfg(test)]
mod tests {
    use foyer_core::auth::AuthResult;

    use super::*;

    fn settled(result: AuthResult) -> SessionState {
        let mut session = SessionState::new();
        session.begin_attempt();
        session.settle(result);
        session
    }

    #[test]
    fn test_kent_routes_to_quotes() {
        let session = settled(AuthResult::Success {
            identity: "kent".to_string(),
        });
        assert_eq!(route(&session), View::Quotes);
    }

    #[test]
    fn test_other_identity_routes_to_admin() {
        let session = settled(AuthResult::Success {
            identity: "admin".to_string(),
        });
        assert_eq!(route(&session), View::Admin { identity: "admin" });
    }

    #[test]
    fn test_anonymous_routes_to_login() {
        let session = SessionState::new();
        assert_eq!(
            route(&session),
            View::Login {
                attempt_failed: false
            }
        );
    }

    #[test]
    fn test_login_view_carries_error_flag() {
        let session = settled(AuthResult::Failure);
        assert_eq!(
            route(&session),
            View::Login {
                attempt_failed: true
            }
        );
    }

    #[test]
    fn test_route_is_read_only() {
        let session = settled(AuthResult::Success {
            identity: "kent".to_string(),
        });
        let before = session.clone();
        let _ = route(&session);
        let _ = route(&session);
        assert_eq!(session, before);
    }
}
