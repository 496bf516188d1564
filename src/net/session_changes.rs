//! Session-change notification hub.
//!
//! The auth service reports sign-in, sign-out, and token-refresh events;
//! `SessionChanges` fans each one out to the page-local observers that are
//! registered at the time.
//!
//! LIFECYCLE
//! =========
//! `subscribe` returns a `SessionSubscription` handle; dropping it (or
//! calling `unsubscribe`) deregisters the listener. A page that ties the
//! handle to `on_cleanup` cannot keep receiving events past unmount.
//!
//! Delivery is effectively single-threaded in the browser; the locks exist
//! so the hub can live in Leptos context, and are uncontended.

#[cfg(test)]
#[path = "session_changes_test.rs"]
mod session_changes_test;

use std::sync::{Arc, Mutex, Weak};

use crate::net::types::Session;

type Listener = Arc<Mutex<dyn FnMut(Option<Session>) + Send>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Broadcast registry for session-change events.
#[derive(Clone, Default)]
pub struct SessionChanges {
    registry: Arc<Mutex<Registry>>,
}

impl SessionChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it receives every notification until the
    /// returned handle is dropped or `unsubscribe`d.
    pub fn subscribe(
        &self,
        listener: impl FnMut(Option<Session>) + Send + 'static,
    ) -> SessionSubscription {
        let listener: Listener = Arc::new(Mutex::new(listener));
        let Ok(mut registry) = self.registry.lock() else {
            return SessionSubscription { id: 0, registry: Weak::new() };
        };
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        SessionSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver the new session value to every live listener, in
    /// registration order.
    ///
    /// The listener list is snapshotted first, so a listener may subscribe
    /// or unsubscribe during delivery: one added mid-delivery only sees
    /// later events, one removed mid-delivery receives nothing further.
    pub fn notify(&self, session: Option<Session>) {
        let snapshot = match self.registry.lock() {
            Ok(registry) => registry.listeners.clone(),
            Err(_) => return,
        };
        for (id, listener) in snapshot {
            let registered = self
                .registry
                .lock()
                .is_ok_and(|r| r.listeners.iter().any(|(lid, _)| *lid == id));
            if registered {
                if let Ok(mut listener) = listener.lock() {
                    (&mut *listener)(session.clone());
                }
            }
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().map_or(0, |r| r.listeners.len())
    }
}

/// Handle for one registered listener; deregisters on drop.
pub struct SessionSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl SessionSubscription {
    /// Stop delivery now rather than at end of scope.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.lock() {
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
