// src/domain/badge.rs

use crate::domain::listing::Property;

const DEFAULT_BADGE: &str = "Featured Collection - Find Your Perfect Home";

/// Checked in order; the first id fragment found wins.
const BADGES: [(&str, &str); 5] = [
    ("seaside", "Coastal Escapes - Where Waves Beckon"),
    ("metropolitan", "Urban Oasis - Life in the Heart of the City"),
    ("rustic", "Countryside Charm - Escape to Nature’s Embrace"),
    ("penthouse", "Skyline Living - Elevated Luxury Above the City"),
    ("mansion", "Elite Estates - Space, Prestige & Privacy"),
];

pub fn badge_for_property(id: &str) -> &'static str {
    BADGES
        .iter()
        .find(|(fragment, _)| id.contains(fragment))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_BADGE)
}

/// Card shown by the property category carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCard {
    pub id: &'static str,
    pub image_src: &'static str,
    pub image_alt: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub location: &'static str,
    pub href: String,
    pub cta_text: &'static str,
}

impl PropertyCard {
    pub fn from_property(p: &Property) -> Self {
        Self {
            id: p.id,
            image_src: p.image_src,
            image_alt: p.alt_text(),
            badge: badge_for_property(p.id),
            title: p.title,
            description: p.description,
            price: p.price,
            location: p.location,
            href: p.href(),
            cta_text: "View Property Details",
        }
    }
}
