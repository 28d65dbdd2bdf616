use crate::domain::listing::{Amenity, AmenityIcon, Property, PropertyKind};

const fn amenity(label: &'static str, icon: AmenityIcon) -> Amenity {
    Amenity { label, icon }
}

pub static PROPERTIES: &[Property] = &[
    Property {
        id: "seaside-serenity-villa",
        title: "Seaside Serenity Villa",
        location: "Malibu, California",
        price: "$1,250,000",
        kind: PropertyKind::Villa,
        size_sqft: 4200,
        year_built: 2021,
        excerpt: "A stunning 4-bedroom, 3-bathroom villa in a peaceful suburban neighborhood...",
        description: "A stunning 4-bedroom, 3-bathroom villa in a peaceful suburban neighborhood with modern finishes, ample natural light, and a serene outdoor space.",
        image_src: "/static/properties/pd-1.png",
        image_alt: Some("Seaside Serenity Villa"),
        images: &[
            "/static/properties/pd-1.png",
            "/static/properties/pd-2.png",
            "/static/properties/pd-3.png",
            "/static/properties/pd-4.png",
            "/static/properties/pd-5.png",
            "/static/properties/pd-6.png",
            "/static/properties/pd-7.png",
            "/static/properties/pd-8.png",
            "/static/properties/pd-9.png",
            "/static/properties/pd-10.png",
        ],
        amenities: &[
            amenity("4-Bedroom", AmenityIcon::Bedroom),
            amenity("3-Bathroom", AmenityIcon::Bathroom),
            amenity("Villa", AmenityIcon::Kind),
        ],
    },
    Property {
        id: "metropolitan-haven",
        title: "Metropolitan Haven",
        location: "New York, USA",
        price: "$650,000",
        kind: PropertyKind::Apartment,
        size_sqft: 1450,
        year_built: 2018,
        excerpt: "Modern apartment in the heart of the city with great views...",
        description: "Immerse yourself in the energy of the city. This modern apartment offers open-plan living, sleek finishes, and easy access to key hotspots.",
        image_src: "/static/properties/pd-2.png",
        image_alt: Some("Metropolitan Haven"),
        images: &[
            "/static/properties/pd-2.png",
            "/static/properties/pd-3.png",
            "/static/properties/pd-4.png",
            "/static/properties/pd-5.png",
        ],
        amenities: &[
            amenity("2-Bedroom", AmenityIcon::Bedroom),
            amenity("2-Bathroom", AmenityIcon::Bathroom),
            amenity("Apartment", AmenityIcon::Kind),
        ],
    },
    Property {
        id: "rustic-retreat-cottage",
        title: "Rustic Retreat Cottage",
        location: "Colorado, USA",
        price: "$350,000",
        kind: PropertyKind::Cottage,
        size_sqft: 2100,
        year_built: 2015,
        excerpt: "Cozy countryside cottage nestled amidst rolling hills...",
        description: "Find tranquility in the countryside. This charming cottage combines rustic character with comfortable modern touches and scenic surroundings.",
        image_src: "/static/properties/pd-3.png",
        image_alt: Some("Rustic Retreat Cottage"),
        images: &[
            "/static/properties/pd-3.png",
            "/static/properties/pd-4.png",
            "/static/properties/pd-6.png",
            "/static/properties/pd-8.png",
        ],
        amenities: &[
            amenity("3-Bedroom", AmenityIcon::Bedroom),
            amenity("2-Bathroom", AmenityIcon::Bathroom),
            amenity("Cottage", AmenityIcon::Kind),
        ],
    },
    Property {
        id: "skyline-luxury-penthouse",
        title: "Skyline Luxury Penthouse",
        location: "Dubai, UAE",
        price: "$2,450,000",
        kind: PropertyKind::Penthouse,
        size_sqft: 5200,
        year_built: 2023,
        excerpt: "An ultra-modern penthouse offering breathtaking skyline views and premium finishes...",
        description: "Experience elevated living in this luxurious penthouse featuring floor-to-ceiling glass walls, private terrace access, smart home integration, and world-class amenities.",
        image_src: "/static/properties/pd-4.png",
        image_alt: Some("Skyline Luxury Penthouse"),
        images: &[
            "/static/properties/pd-4.png",
            "/static/properties/pd-5.png",
            "/static/properties/pd-6.png",
            "/static/properties/pd-7.png",
            "/static/properties/pd-8.png",
            "/static/properties/pd-9.png",
            "/static/properties/pd-10.png",
            "/static/properties/pd-1.png",
            "/static/properties/pd-2.png",
            "/static/properties/pd-3.png",
        ],
        amenities: &[
            amenity("5-Bedroom", AmenityIcon::Bedroom),
            amenity("4-Bathroom", AmenityIcon::Bathroom),
            amenity("Penthouse", AmenityIcon::Kind),
        ],
    },
    Property {
        id: "lakeside-modern-mansion",
        title: "Lakeside Modern Mansion",
        location: "Geneva, Switzerland",
        price: "$3,800,000",
        kind: PropertyKind::Mansion,
        size_sqft: 8500,
        year_built: 2020,
        excerpt: "A breathtaking lakeside mansion blending modern architecture with serene waterfront views...",
        description: "This exclusive lakeside mansion offers expansive glass walls, a private dock, infinity pool, home cinema, and luxury spa facilities.",
        image_src: "/static/properties/pd-5.png",
        image_alt: Some("Lakeside Modern Mansion"),
        images: &[
            "/static/properties/pd-5.png",
            "/static/properties/pd-6.png",
            "/static/properties/pd-7.png",
            "/static/properties/pd-8.png",
            "/static/properties/pd-9.png",
            "/static/properties/pd-10.png",
            "/static/properties/pd-1.png",
            "/static/properties/pd-2.png",
            "/static/properties/pd-3.png",
            "/static/properties/pd-4.png",
        ],
        amenities: &[
            amenity("6-Bedroom", AmenityIcon::Bedroom),
            amenity("5-Bathroom", AmenityIcon::Bathroom),
            amenity("Mansion", AmenityIcon::Kind),
        ],
    },
];
