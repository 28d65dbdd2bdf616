//! Navigation, banner and footer content shared by every page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

pub const SITE_NAME: &str = "Estatein";

pub static NAV_LINKS: &[NavLink] = &[
    link("Home", "/"),
    link("About", "/about"),
    link("Properties", "/properties"),
    link("Services", "/services"),
];

pub const BANNER_MESSAGE: &str = "✨ Discover Your Dream Property with Estatein";
pub const BANNER_LINK: NavLink = link("Learn More", "/properties");

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Home",
        links: &[
            link("Hero Section", "/"),
            link("Features", "/#features"),
            link("Properties", "/properties"),
            link("Testimonials", "/#testimonials"),
            link("FAQ's", "/#faqs"),
        ],
    },
    FooterColumn {
        title: "About Us",
        links: &[
            link("Our Story", "/about"),
            link("Our Works", "/about#works"),
            link("How It Works", "/about#how-it-works"),
            link("Our Team", "/about#team"),
            link("Our Clients", "/about#clients"),
        ],
    },
    FooterColumn {
        title: "Properties",
        links: &[link("Portfolio", "/properties"), link("Categories", "/properties#categories")],
    },
    FooterColumn {
        title: "Services",
        links: &[
            link("Valuation Mastery", "/services#valuation"),
            link("Strategic Marketing", "/services#valuation"),
            link("Negotiation Wizardry", "/services#valuation"),
            link("Closing Success", "/services#valuation"),
            link("Property Management", "/services#management"),
        ],
    },
    FooterColumn {
        title: "Contact Us",
        links: &[link("Contact Form", "/contact"), link("Our Offices", "/contact#offices")],
    },
];

pub static SOCIAL_LINKS: &[NavLink] = &[
    link("Facebook", "#"),
    link("LinkedIn", "#"),
    link("Twitter", "#"),
    link("YouTube", "#"),
];
