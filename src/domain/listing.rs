// src/domain/listing.rs

use serde::Serialize;

/// The kind of dwelling a property is, as offered by the "Property Type" filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Villa,
    Cottage,
    Penthouse,
    Mansion,
}

impl PropertyKind {
    pub fn slug(self) -> &'static str {
        match self {
            PropertyKind::Apartment => "apartment",
            PropertyKind::House => "house",
            PropertyKind::Villa => "villa",
            PropertyKind::Cottage => "cottage",
            PropertyKind::Penthouse => "penthouse",
            PropertyKind::Mansion => "mansion",
        }
    }
}

/// Which glyph an amenity pill is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmenityIcon {
    Bedroom,
    Bathroom,
    Kind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Amenity {
    pub label: &'static str,
    pub icon: AmenityIcon,
}

/// The canonical property listing. Every section that shows a property reads this shape;
/// section-specific display data is derived from it (see `domain::badge`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    /// Display price, e.g. "$1,250,000".
    pub price: &'static str,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub size_sqft: u32,
    pub year_built: u32,
    pub excerpt: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
    pub image_alt: Option<&'static str>,
    pub images: &'static [&'static str],
    pub amenities: &'static [Amenity],
}

impl Property {
    pub fn href(&self) -> String {
        format!("/properties/{}", self.id)
    }

    pub fn alt_text(&self) -> &'static str {
        self.image_alt.unwrap_or(self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub avatar_src: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer_preview: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficeRegion {
    Regional,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub id: &'static str,
    pub category: OfficeRegion,
    /// e.g. "Main Headquarters"
    pub badge: &'static str,
    /// Address line.
    pub title: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location_tag: &'static str,
    pub direction_href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image_src: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: Property = Property {
        id: "plain-house",
        title: "Plain House",
        location: "Nowhere, USA",
        price: "$100,000",
        kind: PropertyKind::House,
        size_sqft: 900,
        year_built: 1999,
        excerpt: "",
        description: "",
        image_src: "/static/properties/pd-1.png",
        image_alt: None,
        images: &[],
        amenities: &[],
    };

    #[test]
    fn alt_text_falls_back_to_title() {
        assert_eq!(PLAIN.alt_text(), "Plain House");
        let with_alt = Property {
            image_alt: Some("Front porch"),
            ..PLAIN
        };
        assert_eq!(with_alt.alt_text(), "Front porch");
    }

    #[test]
    fn serialises_with_listing_field_names() {
        let json = serde_json::to_value(PLAIN).unwrap();
        assert_eq!(json["type"], "house");
        assert_eq!(json["sizeSqft"], 900);
        assert_eq!(json["yearBuilt"], 1999);
        assert_eq!(json["imageSrc"], "/static/properties/pd-1.png");
        assert!(json["imageAlt"].is_null());
    }

    #[test]
    fn href_uses_id_as_path_segment() {
        assert_eq!(PLAIN.href(), "/properties/plain-house");
    }
}
