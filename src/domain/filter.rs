// src/domain/filter.rs

use std::collections::BTreeMap;

use crate::domain::listing::{Office, OfficeRegion, Property};

/// Filter keys offered by the properties filter bar, in display order.
pub const FILTER_KEYS: [&str; 5] = ["location", "type", "price", "size", "year"];

/// Price ranges are written in thousands of dollars ("100-300").
const PRICE_UNIT: f64 = 1000.0;

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// "Malibu, California" -> "malibu-california"
pub fn slugify_location(location: &str) -> String {
    let normalized = normalize(location);
    let mut slug = String::with_capacity(normalized.len());
    let mut chars = normalized.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ',' || c.is_whitespace() {
            slug.push('-');
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
        } else {
            slug.push(c);
        }
    }

    slug
}

/// "$1,250,000" -> Some(1250000.0). Anything without digits yields `None`.
pub fn parse_price(price: &str) -> Option<f64> {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().ok()
}

/// A numeric bracket from a filter option value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRange {
    AtLeast(f64),
    Between(f64, f64),
}

impl ValueRange {
    /// Parse `"<min>+"` or `"<min>-<max>"`, scaling both bounds by `unit`.
    pub fn parse(raw: &str, unit: f64) -> Option<Self> {
        let raw = raw.trim();
        if let Some(min) = raw.strip_suffix('+') {
            let min: f64 = min.trim().parse().ok()?;
            if !min.is_finite() {
                return None;
            }
            return Some(ValueRange::AtLeast(min * unit));
        }

        let (min, max) = raw.split_once('-')?;
        let min: f64 = min.trim().parse().ok()?;
        let max: f64 = max.trim().parse().ok()?;
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        Some(ValueRange::Between(min * unit, max * unit))
    }

    pub fn contains(&self, value: f64) -> bool {
        match *self {
            ValueRange::AtLeast(min) => value >= min,
            ValueRange::Between(min, max) => value >= min && value <= max,
        }
    }
}

/// Unparseable ranges and unparseable values both mean "no constraint".
fn matches_range(value: Option<f64>, range: &str, unit: f64) -> bool {
    match (value, ValueRange::parse(range, unit)) {
        (Some(value), Some(range)) => range.contains(value),
        _ => true,
    }
}

/// Selected filter option per key; an empty value means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<&'static str, String>,
}

impl FilterState {
    /// Every known key set to "", the state after the filter options change.
    pub fn reset() -> Self {
        Self {
            values: FILTER_KEYS.iter().map(|k| (*k, String::new())).collect(),
        }
    }

    /// Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(known) = FILTER_KEYS.iter().find(|k| **k == key) {
            self.values.insert(*known, value.trim().to_string());
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_active(&self) -> bool {
        self.values.values().any(|v| !v.is_empty())
    }
}

/// The search box text plus the filter bar selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyQuery {
    pub text: String,
    pub filters: FilterState,
}

impl PropertyQuery {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut text = String::new();
        let mut filters = FilterState::reset();
        for (key, value) in pairs {
            if key == "q" {
                text = value.to_string();
            } else {
                filters.set(key, value);
            }
        }
        Self { text, filters }
    }

    pub fn matches(&self, property: &Property) -> bool {
        let query = normalize(&self.text);
        let f = &self.filters;

        let haystack = normalize(&format!(
            "{} {} {}",
            property.title, property.location, property.description
        ));
        let matches_text = query.is_empty() || haystack.contains(&query);

        let location = f.get("location");
        let matches_location = location.is_empty() || slugify_location(property.location) == location;

        let kind = f.get("type");
        let matches_kind = kind.is_empty() || property.kind.slug() == kind;

        let matches_price = matches_range(parse_price(property.price), f.get("price"), PRICE_UNIT);
        let matches_size = matches_range(Some(f64::from(property.size_sqft)), f.get("size"), 1.0);
        let matches_year = matches_range(Some(f64::from(property.year_built)), f.get("year"), 1.0);

        matches_text
            && matches_location
            && matches_kind
            && matches_price
            && matches_size
            && matches_year
    }
}

/// Filter `properties`, keeping their original order. No paging happens here.
pub fn filter_properties<'a>(properties: &'a [Property], query: &PropertyQuery) -> Vec<&'a Property> {
    properties.iter().filter(|p| query.matches(p)).collect()
}

/// Office location tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfficeCategory {
    #[default]
    All,
    Regional,
    International,
}

impl OfficeCategory {
    pub const TABS: [OfficeCategory; 3] = [
        OfficeCategory::All,
        OfficeCategory::Regional,
        OfficeCategory::International,
    ];

    /// Unknown slugs fall back to `All`.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim() {
            "regional" => OfficeCategory::Regional,
            "international" => OfficeCategory::International,
            _ => OfficeCategory::All,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            OfficeCategory::All => "all",
            OfficeCategory::Regional => "regional",
            OfficeCategory::International => "international",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OfficeCategory::All => "All",
            OfficeCategory::Regional => "Regional",
            OfficeCategory::International => "International",
        }
    }

    fn admits(self, region: OfficeRegion) -> bool {
        match self {
            OfficeCategory::All => true,
            OfficeCategory::Regional => region == OfficeRegion::Regional,
            OfficeCategory::International => region == OfficeRegion::International,
        }
    }
}

pub fn filter_offices(offices: &[Office], category: OfficeCategory) -> Vec<&Office> {
    offices.iter().filter(|o| category.admits(o.category)).collect()
}
