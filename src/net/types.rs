//! Wire types for the hosted auth service.
//!
//! The service speaks a GoTrue-style JSON API; these are the payload shapes
//! this page consumes. Presence or absence of a session is always
//! `Option<Session>`, so view branching on auth state stays exhaustive.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use uuid::Uuid;

/// An authenticated visitor as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

/// An externally-issued session: proof that a visitor is authenticated.
///
/// Opaque to this page beyond presence, expiry, and the display identity
/// carried in `user`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl Session {
    /// True when the service stamped an expiry and it has passed.
    pub fn expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }
}
