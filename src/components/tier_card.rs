//! Card component for one pricing tier.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::state::session::SessionState;
use crate::state::tiers::Tier;

/// One tier in the comparison grid.
///
/// The call-to-action targets the dashboard for signed-in visitors and the
/// sign-up flow otherwise, tracking the session signal without a reload.
#[component]
pub fn TierCard(tier: &'static Tier, session: RwSignal<SessionState>) -> impl IntoView {
    let cta_href = move || session.get().cta_destination();

    let card_class = if tier.popular {
        "tier-card tier-card--popular"
    } else {
        "tier-card"
    };

    view! {
        <div class=card_class>
            <Show when=move || tier.popular>
                <span class="tier-card__badge">"Most Popular"</span>
            </Show>

            <span class="tier-card__icon">
                <Icon kind=tier.icon/>
            </span>
            <h3 class="tier-card__name">{tier.name}</h3>
            <p class="tier-card__description">{tier.description}</p>

            <div class="tier-card__price">
                <span class="tier-card__amount">{tier.price}</span>
                <Show when=move || tier.monthly()>
                    <span class="tier-card__period">"/month"</span>
                </Show>
            </div>

            <ul class="tier-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="tier-card__feature">
                                <Icon kind=IconKind::Check/>
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <a class="tier-card__cta" href=cta_href>
                {tier.cta_label}
                <Icon kind=IconKind::ArrowRight/>
            </a>
        </div>
    }
}
