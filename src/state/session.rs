#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Locally cached view of the externally-owned session.
///
/// The cache only ever mirrors what the auth service last reported; there
/// is no separate logged-in flag to drift out of sync with it.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub source: SessionSource,
}

/// Which write last produced the cached value.
///
/// Change notifications outrank the one-shot mount fetch: a fetch that
/// resolves after a notification has already landed is stale and must not
/// win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionSource {
    /// Nothing observed yet; the view treats this as logged out.
    #[default]
    Unresolved,
    /// Value from the initial fetch.
    Fetched,
    /// Value from a session-change notification.
    Notified,
}

impl SessionState {
    /// Apply the result of the initial fetch. Discarded if a change
    /// notification already resolved the state.
    pub fn apply_fetch(&mut self, session: Option<Session>) {
        if self.source == SessionSource::Notified {
            return;
        }
        self.session = session;
        self.source = SessionSource::Fetched;
    }

    /// Apply a session-change notification. Always authoritative.
    pub fn apply_change(&mut self, session: Option<Session>) {
        self.session = session;
        self.source = SessionSource::Notified;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Display identity for the nav area.
    pub fn identity(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.email.as_str())
    }

    /// Where a tier's call-to-action sends the visitor.
    pub fn cta_destination(&self) -> &'static str {
        if self.is_authenticated() { "/dashboard" } else { "/signup" }
    }
}
