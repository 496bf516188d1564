//! Inline SVG icons built from primitive shapes, so the page carries no
//! icon-font or image-asset dependency.

use leptos::prelude::*;

/// Icon vocabulary used by the tier catalog and the page chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sparkles,
    Cpu,
    Brain,
    Building,
    Check,
    ArrowRight,
    LogOut,
}

/// A 20x20 stroke icon.
#[component]
pub fn Icon(kind: IconKind) -> impl IntoView {
    let shapes = match kind {
        IconKind::Sparkles => view! {
            <path d="M10 2 L12.2 7.8 L18 10 L12.2 12.2 L10 18 L7.8 12.2 L2 10 L7.8 7.8 Z"></path>
        }
        .into_any(),
        IconKind::Cpu => view! {
            <rect x="5" y="5" width="10" height="10" rx="1"></rect>
            <rect x="8" y="8" width="4" height="4"></rect>
            <line x1="10" y1="2" x2="10" y2="5"></line>
            <line x1="10" y1="15" x2="10" y2="18"></line>
            <line x1="2" y1="10" x2="5" y2="10"></line>
            <line x1="15" y1="10" x2="18" y2="10"></line>
        }
        .into_any(),
        IconKind::Brain => view! {
            <circle cx="7" cy="9" r="4"></circle>
            <circle cx="13" cy="9" r="4"></circle>
            <path d="M5 12 Q10 17 15 12"></path>
        }
        .into_any(),
        IconKind::Building => view! {
            <rect x="5" y="3" width="10" height="14"></rect>
            <line x1="8" y1="7" x2="12" y2="7"></line>
            <line x1="8" y1="10" x2="12" y2="10"></line>
            <line x1="8" y1="13" x2="12" y2="13"></line>
        }
        .into_any(),
        IconKind::Check => view! {
            <polyline points="4 11 8 15 16 5"></polyline>
        }
        .into_any(),
        IconKind::ArrowRight => view! {
            <line x1="3" y1="10" x2="16" y2="10"></line>
            <polyline points="11 5 16 10 11 15"></polyline>
        }
        .into_any(),
        IconKind::LogOut => view! {
            <path d="M12 3 H5 V17 H12"></path>
            <line x1="9" y1="10" x2="18" y2="10"></line>
            <polyline points="14 6 18 10 14 14"></polyline>
        }
        .into_any(),
    };

    view! {
        <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
            {shapes}
        </svg>
    }
}
