#[cfg(test)]
#[path = "tiers_test.rs"]
mod tiers_test;

use crate::components::icon::IconKind;

/// A static pricing plan descriptor. The catalog is fixed at compile time;
/// nothing here is user- or server-derived.
#[derive(Clone, Copy, Debug)]
pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub features: &'static [&'static str],
    pub cta_label: &'static str,
    pub popular: bool,
}

impl Tier {
    /// Monthly-priced tiers render a "/month" suffix; the custom-quoted
    /// enterprise tier does not.
    pub fn monthly(&self) -> bool {
        self.price != "Custom"
    }
}

/// The pricing catalog, in display order.
pub const TIERS: &[Tier] = &[
    Tier {
        name: "Free",
        price: "$0",
        description: "Perfect for trying out our AI capabilities",
        icon: IconKind::Sparkles,
        features: &[
            "100 AI queries/month",
            "Basic text generation",
            "Standard response time",
            "Community support",
            "Basic prompt templates",
        ],
        cta_label: "Get Started",
        popular: false,
    },
    Tier {
        name: "Pro",
        price: "$29",
        description: "For professionals and content creators",
        icon: IconKind::Cpu,
        features: &[
            "2,000 AI queries/month",
            "Advanced text generation",
            "Fast response time",
            "Priority email support",
            "Custom prompt templates",
            "API access",
            "Content optimization tools",
        ],
        cta_label: "Start Free Trial",
        popular: true,
    },
    Tier {
        name: "Business",
        price: "$99",
        description: "For growing teams and businesses",
        icon: IconKind::Brain,
        features: &[
            "10,000 AI queries/month",
            "Enterprise-grade AI models",
            "Ultra-fast response time",
            "24/7 priority support",
            "Advanced analytics",
            "Team collaboration",
            "Custom model fine-tuning",
        ],
        cta_label: "Start Free Trial",
        popular: false,
    },
    Tier {
        name: "Enterprise",
        price: "Custom",
        description: "Custom AI solutions for large organizations",
        icon: IconKind::Building,
        features: &[
            "Unlimited AI queries",
            "Custom AI model development",
            "Dedicated infrastructure",
            "Dedicated success manager",
            "SLA guarantee",
            "On-premise deployment",
            "Custom security controls",
        ],
        cta_label: "Contact Sales",
        popular: false,
    },
];
