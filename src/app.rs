//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::auth::AuthContext;
use crate::pages::{pricing::PricingPage, signin::SignInPage, signup::SignUpPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth-service context and sets up client-side routing. The
/// cached session itself is owned by the pricing page, not the app, so its
/// lifecycle follows page mount/unmount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::from_env();
    provide_context(auth.clone());

    // One app-lifetime watch turns other tabs' session changes into local
    // notifications.
    crate::util::session_store::watch(auth.changes());

    view! {
        <Stylesheet id="leptos" href="/pkg/nimbus-pricing.css"/>
        <Title text="Nimbus AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/pricing"/> }/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
