//! Static site content. Every table is defined once, here, and never mutated.

pub mod company;
pub mod faqs;
pub mod forms;
pub mod offices;
pub mod properties;
pub mod services;
pub mod site;
pub mod testimonials;

pub use faqs::FAQS;
pub use offices::OFFICES;
pub use properties::PROPERTIES;
pub use testimonials::TESTIMONIALS;

use crate::domain::listing::Property;

/// A `<select>` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Shorthand for option tables.
pub const fn opt(label: &'static str, value: &'static str) -> SelectOption {
    SelectOption { label, value }
}

pub fn find_property(id: &str) -> Option<&'static Property> {
    PROPERTIES.iter().find(|p| p.id == id)
}
