//! Persisted session snapshot and cross-tab change propagation.
//!
//! The session lives in `localStorage` under a single key. `storage`
//! events fire in every *other* tab when that key changes, so the watch
//! registered at the app root turns another tab's sign-in, sign-out, or
//! token refresh into a local session-change notification. Requires a
//! browser environment; non-browser builds see an empty store.

use crate::net::session_changes::SessionChanges;
use crate::net::types::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "nimbus_auth_session";

/// Read the persisted session, if any. Unparseable payloads read as none.
pub fn read() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session snapshot.
pub fn write(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(session) {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Forward other tabs' changes to the session key into the hub, for the
/// lifetime of the page.
///
/// The closure is leaked on purpose: the listener is registered once at
/// the app root and never removed (see `Closure::into_js_value`).
pub fn watch(changes: &SessionChanges) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let changes = changes.clone();
        let callback = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
            if event.key().as_deref() != Some(STORAGE_KEY) {
                return;
            }
            let session = event
                .new_value()
                .and_then(|raw| serde_json::from_str::<Session>(&raw).ok());
            changes.notify(session);
        }) as Box<dyn FnMut(web_sys::StorageEvent)>);

        if let Some(window) = web_sys::window() {
            let result = window.add_event_listener_with_callback(
                "storage",
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            );
            if result.is_err() {
                leptos::logging::warn!("failed to register the storage listener");
            }
        }

        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = changes;
    }
}
