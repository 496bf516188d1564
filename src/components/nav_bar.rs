//! Top navigation showing auth links or the signed-in identity.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::icon::{Icon, IconKind};
use crate::net::auth::AuthContext;
use crate::state::session::SessionState;

/// Pricing-page nav bar.
///
/// Signed out: sign-in / sign-up links. Signed in: the user's email and a
/// sign-out button. Sign-out always returns to `/pricing`, whether or not
/// the service call succeeds.
#[component]
pub fn NavBar(session: RwSignal<SessionState>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let identity = move || {
        session
            .get()
            .identity()
            .map(str::to_owned)
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                auth.sign_out().await;
                navigate("/pricing", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate);
        }
    };

    view! {
        <nav class="nav-bar">
            <a href="/pricing" class="nav-bar__logo" title="Nimbus AI">
                <Icon kind=IconKind::Sparkles/>
            </a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a href="/signin" class="nav-bar__link">"Sign in"</a>
                        <a href="/signup" class="nav-bar__link nav-bar__link--primary">"Sign up"</a>
                    }
                }
            >
                <span class="nav-bar__user">{identity}</span>
                <button class="btn nav-bar__sign-out" on:click=on_sign_out.clone()>
                    <Icon kind=IconKind::LogOut/>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
