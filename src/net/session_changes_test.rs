use super::*;
use std::sync::{Arc, Mutex};

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

/// Records the identity carried by each delivered notification.
fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, impl FnMut(Option<Session>) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let listener = move |s: Option<Session>| {
        sink.lock().unwrap().push(s.map(|s| s.user.email));
    };
    (seen, listener)
}

#[test]
fn delivers_to_every_subscriber() {
    let changes = SessionChanges::new();
    let (seen_a, listener_a) = recorder();
    let (seen_b, listener_b) = recorder();
    let _sub_a = changes.subscribe(listener_a);
    let _sub_b = changes.subscribe(listener_b);

    changes.notify(Some(session("dev@example.com")));

    assert_eq!(*seen_a.lock().unwrap(), vec![Some("dev@example.com".to_owned())]);
    assert_eq!(*seen_b.lock().unwrap(), vec![Some("dev@example.com".to_owned())]);
}

#[test]
fn absent_session_is_delivered_as_none() {
    let changes = SessionChanges::new();
    let (seen, listener) = recorder();
    let _sub = changes.subscribe(listener);

    changes.notify(None);

    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let changes = SessionChanges::new();
    let (seen, listener) = recorder();
    let sub = changes.subscribe(listener);

    changes.notify(None);
    sub.unsubscribe();
    changes.notify(Some(session("dev@example.com")));

    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn dropping_the_handle_stops_delivery() {
    let changes = SessionChanges::new();
    let (seen, listener) = recorder();
    {
        let _sub = changes.subscribe(listener);
        changes.notify(None);
    }
    changes.notify(Some(session("dev@example.com")));

    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[test]
fn listener_count_tracks_registrations() {
    let changes = SessionChanges::new();
    assert_eq!(changes.listener_count(), 0);

    let sub_a = changes.subscribe(|_| {});
    let sub_b = changes.subscribe(|_| {});
    assert_eq!(changes.listener_count(), 2);

    sub_a.unsubscribe();
    assert_eq!(changes.listener_count(), 1);
    drop(sub_b);
    assert_eq!(changes.listener_count(), 0);
}

#[test]
fn listener_subscribed_during_delivery_misses_the_inflight_event() {
    let changes = SessionChanges::new();
    let (seen_late, late_listener) = recorder();
    let late_listener = Arc::new(Mutex::new(Some(late_listener)));
    let held = Arc::new(Mutex::new(Vec::new()));

    let _sub = {
        let changes = changes.clone();
        let held = Arc::clone(&held);
        changes.clone().subscribe(move |_| {
            if let Some(listener) = late_listener.lock().unwrap().take() {
                held.lock().unwrap().push(changes.subscribe(listener));
            }
        })
    };

    changes.notify(None);
    assert!(seen_late.lock().unwrap().is_empty());

    changes.notify(Some(session("dev@example.com")));
    assert_eq!(*seen_late.lock().unwrap(), vec![Some("dev@example.com".to_owned())]);
}

#[test]
fn listener_removed_during_delivery_is_skipped() {
    let changes = SessionChanges::new();
    let victim_handle = Arc::new(Mutex::new(None));

    let handle_slot = Arc::clone(&victim_handle);
    let _killer = changes.subscribe(move |_| {
        handle_slot.lock().unwrap().take();
    });

    let (seen_victim, victim_listener) = recorder();
    *victim_handle.lock().unwrap() = Some(changes.subscribe(victim_listener));

    changes.notify(None);

    assert!(seen_victim.lock().unwrap().is_empty());
    assert_eq!(changes.listener_count(), 1);
}

#[test]
fn subscription_outliving_the_hub_drops_cleanly() {
    let changes = SessionChanges::new();
    let sub = changes.subscribe(|_| {});
    drop(changes);
    drop(sub);
}
