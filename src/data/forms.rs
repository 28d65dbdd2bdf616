//! Option lists for the filter bar and the inquiry forms.

use super::{opt, SelectOption};

/// Properties filter bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub options: &'static [SelectOption],
}

pub static PROPERTY_FILTERS: &[FilterSpec] = &[
    FilterSpec {
        key: "location",
        label: "Location",
        options: &[
            opt("Malibu, California", "malibu-california"),
            opt("New York, USA", "new-york-usa"),
            opt("Colorado, USA", "colorado-usa"),
            opt("Dubai, UAE", "dubai-uae"),
            opt("Geneva, Switzerland", "geneva-switzerland"),
        ],
    },
    FilterSpec {
        key: "type",
        label: "Property Type",
        options: &[
            opt("Apartment", "apartment"),
            opt("House", "house"),
            opt("Villa", "villa"),
            opt("Cottage", "cottage"),
            opt("Penthouse", "penthouse"),
            opt("Mansion", "mansion"),
        ],
    },
    FilterSpec {
        key: "price",
        label: "Pricing Range",
        options: &[
            opt("$0 - $100k", "0-100"),
            opt("$100k - $300k", "100-300"),
            opt("$300k+", "300+"),
        ],
    },
    FilterSpec {
        key: "size",
        label: "Property Size",
        options: &[
            opt("0 - 1,000 sqft", "0-1000"),
            opt("1,000 - 2,500 sqft", "1000-2500"),
            opt("2,500+ sqft", "2500+"),
        ],
    },
    FilterSpec {
        key: "year",
        label: "Build Year",
        options: &[
            opt("2020 - 2026", "2020-2026"),
            opt("2010 - 2019", "2010-2019"),
            opt("2000 - 2009", "2000-2009"),
        ],
    },
];

pub static INQUIRY_OPTIONS: &[SelectOption] = &[
    opt("Buying a Property", "buying"),
    opt("Selling a Property", "selling"),
    opt("Partnership", "partnership"),
    opt("General Inquiry", "general"),
];

pub static HEAR_OPTIONS: &[SelectOption] = &[
    opt("Google Search", "google"),
    opt("Social Media", "social"),
    opt("Referral", "referral"),
    opt("Other", "other"),
];

pub static INQUIRY_LOCATION_OPTIONS: &[SelectOption] = &[
    opt("Metropolis", "metropolis"),
    opt("Downtown", "downtown"),
    opt("Uptown", "uptown"),
];

pub static INQUIRY_TYPE_OPTIONS: &[SelectOption] = &[
    opt("Apartment", "apartment"),
    opt("House", "house"),
    opt("Villa", "villa"),
];

pub static BATHROOM_OPTIONS: &[SelectOption] = &[opt("1", "1"), opt("2", "2"), opt("3+", "3+")];

pub static BEDROOM_OPTIONS: &[SelectOption] = &[opt("1", "1"), opt("2", "2"), opt("3+", "3+")];

pub static BUDGET_OPTIONS: &[SelectOption] = &[
    opt("$0 - $100k", "0-100"),
    opt("$100k - $300k", "100-300"),
    opt("$300k+", "300+"),
];
