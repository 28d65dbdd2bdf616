use crate::domain::listing::{Office, OfficeRegion};

pub static OFFICES: &[Office] = &[
    Office {
        id: "o1",
        category: OfficeRegion::Regional,
        badge: "Main Headquarters",
        title: "123 Estatein Plaza, City Center, Metropolis",
        description: "Our main headquarters serve as the heart of Estatein. Located in the bustling city center, this is where our core team of experts operates, driving the excellence and innovation that define us.",
        email: "info@estatein.com",
        phone: "+1 (123) 456-7890",
        location_tag: "Metropolis",
        direction_href: "#",
    },
    Office {
        id: "o2",
        category: OfficeRegion::Regional,
        badge: "Regional Offices",
        title: "456 Urban Avenue, Downtown District, Metropolis",
        description: "Estatein's presence extends to multiple regions, each with its own dynamic real estate landscape. Discover our regional offices, staffed by local experts who understand the nuances of their respective markets.",
        email: "info@estatein.com",
        phone: "+1 (123) 628-7890",
        location_tag: "Metropolis",
        direction_href: "#",
    },
    Office {
        id: "o3",
        category: OfficeRegion::International,
        badge: "International Office",
        title: "12 Rue du Rhône, Geneva, Switzerland",
        description: "Our international desk serves clients buying and selling across borders, pairing local market knowledge with the same standard of service you expect at home.",
        email: "international@estatein.com",
        phone: "+41 22 123 4567",
        location_tag: "Geneva",
        direction_href: "#",
    },
];
