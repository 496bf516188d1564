//! Reusable view components.

pub mod icon;
pub mod nav_bar;
pub mod tier_card;
