//! Authentication lifecycle callbacks.

use serde::{Deserialize, Serialize};

/// Callbacks raised by the host's authentication subsystem.
///
/// Every method defaults to a no-op, so implementors override only the
/// triggers they care about. The host may call these concurrently from any
/// thread and expects them to return promptly without failing.
pub trait SecurityListener: Send + Sync {
    /// A user was authenticated.
    fn authenticated(&self, _username: &str) {}

    /// Authentication failed for `username`.
    fn failed_to_authenticate(&self, _username: &str) {}

    /// A user logged in interactively.
    fn logged_in(&self, _username: &str) {}

    /// An interactive login failed.
    fn failed_to_log_in(&self, _username: &str) {}

    /// A user logged out.
    fn logged_out(&self, _username: &str) {}
}

/// Lifecycle trigger names, used to fire a callback by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityTrigger {
    Authenticated,
    FailedToAuthenticate,
    LoggedIn,
    FailedToLogIn,
    LoggedOut,
}

impl SecurityTrigger {
    pub fn all() -> &'static [SecurityTrigger] {
        &[
            Self::Authenticated,
            Self::FailedToAuthenticate,
            Self::LoggedIn,
            Self::FailedToLogIn,
            Self::LoggedOut,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::FailedToAuthenticate => "failed_to_authenticate",
            Self::LoggedIn => "logged_in",
            Self::FailedToLogIn => "failed_to_log_in",
            Self::LoggedOut => "logged_out",
        }
    }

    /// Invoke the matching callback on `listener`.
    pub fn fire(&self, listener: &dyn SecurityListener, username: &str) {
        match self {
            Self::Authenticated => listener.authenticated(username),
            Self::FailedToAuthenticate => listener.failed_to_authenticate(username),
            Self::LoggedIn => listener.logged_in(username),
            Self::FailedToLogIn => listener.failed_to_log_in(username),
            Self::LoggedOut => listener.logged_out(username),
        }
    }
}

impl std::fmt::Display for SecurityTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
