//! Authentication contract and the reference credential table.
//!
//! The authenticator is modeled as a capability with a single method so a
//! real remote backend can be substituted without touching the session
//! controller or the view router. The bundled [`TableAuthenticator`] is a
//! closed-world stand-in oracle: it resolves every call (it never errors)
//! and maps a credential pair to an [`AuthResult`] by exact match.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Identity recognized for the quotes panel.
pub const QUOTES_IDENTITY: &str = "kent";

/// Boxed future returned by [`Authenticator::authenticate`].
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = AuthResult> + Send + 'a>>;

/// A username/password pair. Both fields are arbitrary text; the only
/// validation rule anywhere is exact match against a known table.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Secrets must never reach logs or panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Verdict of an authentication attempt.
///
/// This is the only value an authenticator may produce. Failure carries no
/// detail: a wrong password and an unknown username are indistinguishable,
/// so the UI cannot leak which identities exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    /// The pair matched; `identity` is the canonical principal name.
    Success { identity: String },
    /// The pair did not match any known entry.
    Failure,
}

impl AuthResult {
    pub fn succeeded(&self) -> bool {
        matches!(self, AuthResult::Success { .. })
    }
}

/// Oracle mapping a credential pair to an [`AuthResult`].
///
/// Implementations resolve, never error, under normal operation; any other
/// failure mode (network, panic) is out of contract and not masked here.
/// They must not log or otherwise expose the password.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> AuthFuture<'_>;
}

/// In-memory credential table with optional simulated latency.
///
/// The reference table is closed and static: exactly two entries, each
/// mapping to a canonical identity equal to its username. Latency makes the
/// pending state observable in the UI; tests run with zero latency.
pub struct TableAuthenticator {
    entries: Vec<(Credential, String)>,
    latency: Duration,
}

impl TableAuthenticator {
    /// Builds the reference table: admin/admin and kent/kent.
    pub fn reference() -> Self {
        Self {
            entries: vec![
                (Credential::new("admin", "admin"), "admin".to_string()),
                (
                    Credential::new(QUOTES_IDENTITY, QUOTES_IDENTITY),
                    QUOTES_IDENTITY.to_string(),
                ),
            ],
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated resolution latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn lookup(&self, username: &str, password: &str) -> AuthResult {
        for (credential, identity) in &self.entries {
            if credential.username == username && credential.password == password {
                return AuthResult::Success {
                    identity: identity.clone(),
                };
            }
        }
        AuthResult::Failure
    }
}

impl Authenticator for TableAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> AuthFuture<'_> {
        // Verdict is computed synchronously; only the resolution is delayed.
        let verdict = self.lookup(username, password);
        let latency = self.latency;
        Box::pin(async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            verdict
        })
    }
}
