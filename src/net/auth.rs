//! Hosted auth service client.
//!
//! The page consumes a GoTrue-style HTTP API; nothing here owns
//! authentication state beyond the persisted session snapshot.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning absent/unavailable since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session fetch and sign-out failures degrade to "logged out" /
//! "proceed anyway" without surfacing errors; only the sign-in and
//! sign-up forms receive the service's message, as a plain string.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::session_changes::{SessionChanges, SessionSubscription};
use crate::net::types::{Session, User};
use crate::util::session_store;

/// HTTP client for the hosted auth service.
#[derive(Clone, Debug)]
pub struct AuthClient {
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            anon_key: anon_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(feature = "hydrate")]
    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    /// Password sign-in via `POST /token?grant_type=password`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, String> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let response =
                gloo_net::http::Request::post(&self.endpoint("token?grant_type=password"))
                    .header("apikey", &self.anon_key)
                    .json(&body)
                    .map_err(|e| e.to_string())?
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;
            if !response.ok() {
                return Err(error_message(&response).await);
            }
            response.json::<Session>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err("not available on server".to_owned())
        }
    }

    /// Registration via `POST /signup`. Returns the new session, or `None`
    /// when the service wants the address confirmed first.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>, String> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::json!({ "email": email, "password": password });
            let response = gloo_net::http::Request::post(&self.endpoint("signup"))
                .header("apikey", &self.anon_key)
                .json(&body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                return Err(error_message(&response).await);
            }
            let text = response.text().await.map_err(|e| e.to_string())?;
            if let Ok(session) = serde_json::from_str::<Session>(&text) {
                return Ok(Some(session));
            }
            serde_json::from_str::<User>(&text)
                .map(|_| None)
                .map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err("not available on server".to_owned())
        }
    }

    /// Validate an access token via `GET /user`. Returns `None` if the
    /// token is no longer good or on the server.
    pub async fn fetch_user(&self, access_token: &str) -> Option<User> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(&self.endpoint("user"))
                .header("apikey", &self.anon_key)
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .ok()?;
            if !response.ok() {
                return None;
            }
            response.json::<User>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            None
        }
    }

    /// Revoke the session via `POST /logout`.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), String> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::post(&self.endpoint("logout"))
                .header("apikey", &self.anon_key)
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !response.ok() {
                return Err(error_message(&response).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err("not available on server".to_owned())
        }
    }
}

/// Pull a human-readable message out of a GoTrue error body. The field
/// name varies by endpoint: `error_description`, `msg`, or `message`.
#[cfg(feature = "hydrate")]
async fn error_message(response: &gloo_net::http::Response) -> String {
    let status = response.status();
    let Ok(value) = response.json::<serde_json::Value>().await else {
        return format!("request failed ({status})");
    };
    value
        .get("error_description")
        .or_else(|| value.get("msg"))
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str())
        .map_or_else(|| format!("request failed ({status})"), ToOwned::to_owned)
}

/// Everything the page needs from the auth service, bundled for context
/// injection at the app root.
#[derive(Clone)]
pub struct AuthContext {
    client: AuthClient,
    changes: SessionChanges,
}

impl AuthContext {
    pub fn new(client: AuthClient) -> Self {
        Self {
            client,
            changes: SessionChanges::new(),
        }
    }

    /// Build from compile-time configuration, with local-dev defaults.
    pub fn from_env() -> Self {
        Self::new(AuthClient::new(
            option_env!("NIMBUS_AUTH_URL").unwrap_or("http://localhost:54321"),
            option_env!("NIMBUS_AUTH_KEY").unwrap_or("nimbus-dev-anon-key"),
        ))
    }

    /// The change hub, for wiring external feeds into the page.
    pub fn changes(&self) -> &SessionChanges {
        &self.changes
    }

    /// One-shot read of the current session: persisted snapshot, expiry
    /// check, then token validation against the service. Every failure
    /// path reads as "absent"; the caller never sees an error.
    pub async fn fetch_session(&self) -> Option<Session> {
        let stored = session_store::read()?;
        if stored.expired_at(now_unix()) {
            session_store::clear();
            return None;
        }
        let user = self.client.fetch_user(&stored.access_token).await?;
        Some(Session { user, ..stored })
    }

    /// Register for session-change notifications; delivery stops when the
    /// returned handle is dropped.
    pub fn on_session_change(
        &self,
        listener: impl FnMut(Option<Session>) + Send + 'static,
    ) -> SessionSubscription {
        self.changes.subscribe(listener)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, String> {
        let session = self.client.sign_in(email, password).await?;
        session_store::write(&session);
        self.changes.notify(Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Option<Session>, String> {
        let session = self.client.sign_up(email, password).await?;
        if let Some(session) = &session {
            session_store::write(session);
            self.changes.notify(Some(session.clone()));
        }
        Ok(session)
    }

    /// Sign out and report "absent" to every observer. The local outcome
    /// is the same whether or not the service call succeeds.
    pub async fn sign_out(&self) {
        if let Some(stored) = session_store::read() {
            if let Err(message) = self.client.sign_out(&stored.access_token).await {
                leptos::logging::warn!("sign-out request failed: {message}");
            }
        }
        session_store::clear();
        self.changes.notify(None);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
