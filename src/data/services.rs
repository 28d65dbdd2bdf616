//! Services-page and property-detail content.

use crate::data::company::TextCard;

/// One tile of the feature strip under each hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub static FEATURE_STRIP: &[FeatureLink] = &[
    FeatureLink { title: "Find Your Dream Home", href: "/properties" },
    FeatureLink { title: "Unlock Property Value", href: "/services#valuation" },
    FeatureLink { title: "Effortless Property Management", href: "/services#management" },
    FeatureLink { title: "Smart Investments, Informed Decisions", href: "/services#investment" },
];

/// A block of four service cards plus a call-to-action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceGroup {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: &'static [TextCard],
    pub cta_title: &'static str,
    pub cta_subtitle: &'static str,
}

pub static SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        anchor: "valuation",
        title: "Unlock Property Value",
        subtitle: "Selling your property should be a rewarding experience, and at Estatein, we make sure it is. Our Property Selling Service is designed to maximize the value of your property, ensuring you get the best deal possible. Explore the categories below to see how we can help you at every step of your selling journey.",
        cards: &[
            TextCard { title: "Valuation Mastery", description: "Discover the true worth of your property with our expert valuation services." },
            TextCard { title: "Strategic Marketing", description: "Selling a property requires more than just a listing; it demands a strategic marketing approach." },
            TextCard { title: "Negotiation Wizardry", description: "Negotiating the best deal is an art, and our negotiation experts are masters of it." },
            TextCard { title: "Closing Success", description: "We guide you through the intricate closing process." },
        ],
        cta_title: "Unlock the Value of Your Property Today",
        cta_subtitle: "Ready to unlock the true value of your property? Explore our Property Selling Service categories and let us help you achieve the best deal possible for your valuable asset.",
    },
    ServiceGroup {
        anchor: "management",
        title: "Effortless Property Management",
        subtitle: "Owning a property should be a pleasure, not a hassle. Estatein's Property Management Service takes the stress out of property ownership, offering comprehensive solutions tailored to your needs. Explore the categories below to see how we can make property management effortless for you.",
        cards: &[
            TextCard { title: "Tenant Harmony", description: "Our Tenant Management services ensure that your tenants have a smooth and reducing vacancies." },
            TextCard { title: "Maintenance Ease", description: "Say goodbye to property maintenance headaches. We handle all aspects of property upkeep." },
            TextCard { title: "Financial Peace of Mind", description: "Managing property finances can be complex. Our financial experts take care of rent collection" },
            TextCard { title: "Legal Guardian", description: "Stay compliant with property laws and regulations effortlessly." },
        ],
        cta_title: "Experience Effortless Property Management",
        cta_subtitle: "Ready to experience hassle-free property management? Explore our Property Management Service categories and let us handle the complexities while you enjoy the benefits of property ownership.",
    },
    ServiceGroup {
        anchor: "investment",
        title: "Smart Investments, Informed Decisions",
        subtitle: "Building a real estate portfolio requires a strategic approach. Estatein's Investment Advisory Service empowers you to make smart investments and informed decisions.",
        cards: &[
            TextCard { title: "Market Insight", description: "Stay ahead of market trends with our expert Market Analysis. We provide in-depth insights into real estate market conditions" },
            TextCard { title: "ROI Assessment", description: "Make investment decisions with confidence. Our ROI assessment services evaluate the potential returns on your investments" },
            TextCard { title: "Customized Strategies", description: "Every investor is unique, and so are their goals. We develop Customized Investment Strategies tailored to your specific needs" },
            TextCard { title: "Diversification Mastery", description: "Diversify your real estate portfolio effectively. Our experts guide you in spreading your investments across various property types and locations" },
        ],
        cta_title: "Unlock Your Investment Potential",
        cta_subtitle: "Explore our Investment Advisory Service categories and let us help you make smarter investment moves with confidence.",
    },
];

pub static KEY_FEATURES: &[&str] = &[
    "Expansive oceanfront terrace for outdoor entertaining",
    "Gourmet kitchen with top-of-the-line appliances",
    "Private beach access for morning strolls and sunset views",
    "Master suite with a spa-inspired bathroom and ocean-facing balcony",
    "Private garage and ample storage space",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingRow {
    pub label: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingGroup {
    pub title: &'static str,
    pub rows: &'static [PricingRow],
}

const fn row(label: &'static str, value: &'static str, note: Option<&'static str>) -> PricingRow {
    PricingRow { label, value, note }
}

pub const PRICING_NOTE: &str = "Note: The figures provided above are estimates and may vary depending on the property, location, and individual circumstances.";

/// Cost breakdown shown under every listing; the listing price row is filled in per property.
pub static PRICING_GROUPS: &[PricingGroup] = &[
    PricingGroup {
        title: "Additional Fees",
        rows: &[
            row("Property Transfer Tax", "$25,000", Some("Based on the sale price and local regulations")),
            row("Legal Fees", "$3,000", Some("Approximate cost for legal services, including title transfer")),
            row("Home Inspection", "$500", Some("Recommended for due diligence")),
            row("Property Insurance", "$1,200", Some("Annual cost for comprehensive property insurance")),
            row("Mortgage Fees", "Varies", Some("If applicable, consult with your lender for specific details")),
        ],
    },
    PricingGroup {
        title: "Monthly Costs",
        rows: &[
            row("Property Taxes", "$1,250", Some("Approximate monthly property tax based on the sale price and local rates")),
            row("Homeowners' Association Fee", "$300", Some("Monthly fee for common area maintenance and security")),
        ],
    },
    PricingGroup {
        title: "Monthly Expenses",
        rows: &[
            row("Property Taxes", "$1,250", None),
            row("Homeowners' Association Fee", "$300", None),
            row("Mortgage Payment", "Varies based on terms and interest rate", Some("If applicable")),
            row("Property Insurance", "$100", Some("Approximate monthly cost")),
        ],
    },
];
