use super::*;
use crate::net::types::{Session, User};

fn session(email: &str) -> Session {
    Session {
        access_token: "at-1".to_owned(),
        expires_at: None,
        user: User {
            id: uuid::Uuid::new_v4(),
            email: email.to_owned(),
        },
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.identity().is_none());
    assert_eq!(state.source, SessionSource::Unresolved);
}

#[test]
fn default_cta_targets_signup() {
    assert_eq!(SessionState::default().cta_destination(), "/signup");
}

// =============================================================
// Initial fetch
// =============================================================

#[test]
fn fetch_resolving_absent_stays_logged_out() {
    let mut state = SessionState::default();
    state.apply_fetch(None);
    assert!(!state.is_authenticated());
    assert_eq!(state.source, SessionSource::Fetched);
}

#[test]
fn fetch_resolving_present_logs_in() {
    let mut state = SessionState::default();
    state.apply_fetch(Some(session("dev@example.com")));
    assert!(state.is_authenticated());
    assert_eq!(state.identity(), Some("dev@example.com"));
    assert_eq!(state.cta_destination(), "/dashboard");
}

// =============================================================
// Write ordering: latest observation wins
// =============================================================

#[test]
fn stale_fetch_cannot_override_a_notification() {
    let mut state = SessionState::default();
    state.apply_change(Some(session("dev@example.com")));
    state.apply_fetch(None);
    assert!(state.is_authenticated());
    assert_eq!(state.identity(), Some("dev@example.com"));
}

#[test]
fn stale_fetch_cannot_resurrect_a_signed_out_session() {
    let mut state = SessionState::default();
    state.apply_change(None);
    state.apply_fetch(Some(session("dev@example.com")));
    assert!(!state.is_authenticated());
}

#[test]
fn notification_after_fetch_updates_normally() {
    let mut state = SessionState::default();
    state.apply_fetch(None);
    state.apply_change(Some(session("dev@example.com")));
    assert!(state.is_authenticated());
    assert_eq!(state.cta_destination(), "/dashboard");
}

#[test]
fn sign_out_notification_clears_identity_and_cta() {
    let mut state = SessionState::default();
    state.apply_fetch(Some(session("dev@example.com")));
    state.apply_change(None);
    assert!(!state.is_authenticated());
    assert!(state.identity().is_none());
    assert_eq!(state.cta_destination(), "/signup");
}
