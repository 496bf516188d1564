//! Pricing page: nav, hero, tier grid, and enterprise contact block.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::tier_card::TierCard;
use crate::state::session::SessionState;
use crate::state::tiers::TIERS;

/// Pricing page.
///
/// Mounts the session observer: one fetch of the current session, then a
/// subscription to session-change notifications until unmount. The cached
/// session is page-local; leaving the page tears all of it down.
#[component]
pub fn PricingPage() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());

    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<crate::net::auth::AuthContext>();

        let fetch_auth = auth.clone();
        leptos::task::spawn_local(async move {
            let fetched = fetch_auth.fetch_session().await;
            // try_update: a fetch resolving after unmount is dropped, and
            // apply_fetch discards it if a notification already landed.
            let _ = session.try_update(|s| s.apply_fetch(fetched));
        });

        let subscription = auth.on_session_change(move |next| {
            let _ = session.try_update(|s| s.apply_change(next));
        });
        on_cleanup(move || subscription.unsubscribe());
    }

    view! {
        <div class="pricing-page">
            <NavBar session=session/>

            <header class="hero">
                <h1 class="hero__title">"AI-Powered Solutions for Your Business"</h1>
                <p class="hero__subtitle">
                    "Harness the power of advanced language models with flexible pricing plans designed to scale with your needs."
                </p>
            </header>

            <section class="tier-grid">
                {TIERS
                    .iter()
                    .map(|tier| view! { <TierCard tier=tier session=session/> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="enterprise">
                <h2 class="enterprise__title">"Need a Custom AI Solution?"</h2>
                <p class="enterprise__body">
                    "Our enterprise plan offers dedicated AI infrastructure, custom model development, and tailored solutions for your specific business needs."
                </p>
                <button class="btn enterprise__cta">"Schedule a Demo"</button>
            </section>
        </div>
    }
}
