//! Sign-up page with an email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthContext;

/// Sign-up page.
///
/// Registration that returns a session behaves like a sign-in: observers
/// are notified and the page returns to pricing. When the service wants
/// the address confirmed first, a notice is shown instead.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(false);
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
            notice.set(false);
            leptos::task::spawn_local(async move {
                match auth.sign_up(&address, &secret).await {
                    Ok(Some(_)) => navigate("/pricing", NavigateOptions::default()),
                    Ok(None) => {
                        let _ = pending.try_update(|p| *p = false);
                        let _ = notice.try_update(|n| *n = true);
                    }
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
            <h1 class="auth-page__title">"Sign up"</h1>

            <Show when=move || error.get().is_some()>
                <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get()>
                <p class="auth-page__notice">
                    "Check your email to confirm your account."
                </p>
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
                {move || if pending.get() { "Signing up..." } else { "Sign up" }}
            </button>

            <p class="auth-page__alt">
                "Already have an account? " <a href="/signin">"Sign in"</a>
            </p>
        </div>
    }
}
