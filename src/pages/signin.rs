//! Sign-in page with an email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthContext;

/// Sign-in page.
///
/// A successful sign-in notifies every session observer (via the auth
/// context) and returns to the pricing page; a failure renders the
/// service's message above the form.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move || {
        let address = email.get().trim().to_owned();
        let secret = password.get();
        if pending.get() || address.is_empty() || secret.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match auth.sign_in(&address, &secret).await {
                    Ok(_) => navigate("/pricing", NavigateOptions::default()),
                    Err(message) => {
                        let _ = pending.try_update(|p| *p = false);
                        let _ = error.try_update(|e| *e = Some(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate, address, secret);
        }
    };
    let submit_on_enter = submit.clone();

    view! {
        <div class="auth-page">
            <a href="/pricing" class="auth-page__back">"\u{2190} Pricing"</a>
            <h1 class="auth-page__title">"Sign in"</h1>

            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <label class="auth-page__label">
                "Email"
                <input
                    class="auth-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                "Password"
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_on_enter();
                        }
                    }
                />
            </label>

            <button
                class="btn btn--primary auth-page__submit"
                disabled=move || pending.get()
                on:click=move |_| submit()
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>

            <p class="auth-page__alt">
                "No account? " <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
