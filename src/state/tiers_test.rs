use super::*;

#[test]
fn four_tiers_in_display_order() {
    let names: Vec<&str> = TIERS.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Free", "Pro", "Business", "Enterprise"]);
}

#[test]
fn feature_counts_match_the_catalog() {
    let counts: Vec<usize> = TIERS.iter().map(|t| t.features.len()).collect();
    assert_eq!(counts, vec![5, 7, 7, 7]);
}

#[test]
fn exactly_one_tier_is_popular() {
    let popular: Vec<&str> = TIERS.iter().filter(|t| t.popular).map(|t| t.name).collect();
    assert_eq!(popular, vec!["Pro"]);
}

#[test]
fn only_the_custom_priced_tier_skips_the_monthly_suffix() {
    for tier in TIERS {
        assert_eq!(tier.monthly(), tier.name != "Enterprise", "tier {}", tier.name);
    }
}

#[test]
fn every_tier_is_fully_described() {
    for tier in TIERS {
        assert!(!tier.name.is_empty());
        assert!(!tier.price.is_empty());
        assert!(!tier.description.is_empty());
        assert!(!tier.cta_label.is_empty());
        assert!(!tier.features.is_empty());
    }
}
