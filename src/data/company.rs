//! About-page content.

use crate::domain::listing::TeamMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Client {
    pub id: &'static str,
    pub since: &'static str,
    pub name: &'static str,
    pub website_href: &'static str,
    pub domain: &'static str,
    pub category: &'static str,
    pub quote: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "200+", label: "Happy Customers" },
    Stat { value: "10k+", label: "Properties For Clients" },
    Stat { value: "16+", label: "Years of Experience" },
];

pub const STORY: &str = "Our story is one of continuous growth and evolution. We started as a small team with big dreams, determined to create a real estate platform that transcended the ordinary.";

pub static VALUES: &[TextCard] = &[
    TextCard {
        title: "Trust",
        description: "Trust is the cornerstone of every successful real estate transaction.",
    },
    TextCard {
        title: "Excellence",
        description: "We set the bar high for ourselves. From the properties we list to the services we provide.",
    },
    TextCard {
        title: "Client-Centric",
        description: "Your dreams and needs are at the center of our universe. We listen, understand.",
    },
    TextCard {
        title: "Our Commitment",
        description: "We are dedicated to providing you with the highest level of service, professionalism, and support.",
    },
];

pub static ACHIEVEMENTS: &[TextCard] = &[
    TextCard {
        title: "3+ Years of Excellence",
        description: "With over 3 years in the industry, we've amassed a wealth of knowledge and experience, becoming a go-to resource for all things real estate.",
    },
    TextCard {
        title: "Happy Clients",
        description: "Our greatest achievement is the satisfaction of our clients. Their success stories fuel our passion for what we do.",
    },
    TextCard {
        title: "Industry Recognition",
        description: "We've earned the respect of our peers and industry leaders, with accolades and awards that reflect our commitment to excellence.",
    },
];

/// Rendered as "Step 01", "Step 02", ... in order.
pub static EXPERIENCE_STEPS: &[TextCard] = &[
    TextCard {
        title: "Discover a World of Possibilities",
        description: "Your journey begins with exploring our carefully curated property listings. Use our intuitive search tools to filter properties based on your preferences, including location, type, size, and budget.",
    },
    TextCard {
        title: "Narrowing Down Your Choices",
        description: "Once you've found properties that catch your eye, save them to your account or make a shortlist. This allows you to compare and revisit your favorites as you make your decision.",
    },
    TextCard {
        title: "Personalized Guidance",
        description: "Have questions about a property or need more information? Our dedicated team of real estate experts is just a call or message away.",
    },
    TextCard {
        title: "See It for Yourself",
        description: "Arrange viewings of the properties you're interested in. We'll coordinate with the property owners and accompany you to ensure you get a firsthand look at your potential new home.",
    },
    TextCard {
        title: "Making Informed Decisions",
        description: "Before making an offer, our team will assist you with due diligence, including property inspections, legal checks, and market analysis. We want you to be fully informed and confident in your choice.",
    },
    TextCard {
        title: "Getting the Best Deal",
        description: "We'll help you negotiate the best terms and prepare your offer. Our goal is to secure the property at the right price and on favorable terms.",
    },
];

pub static TEAM: &[TeamMember] = &[
    TeamMember { name: "Max Mitchell", role: "Founder", image_src: "/static/team.png" },
    TeamMember { name: "Sarah Johnson", role: "Chief Real Estate Officer", image_src: "/static/team2.png" },
    TeamMember { name: "David Brown", role: "Head of Property Management", image_src: "/static/team3.png" },
    TeamMember { name: "Michael Turner", role: "Legal Counsel", image_src: "/static/team4.png" },
];

pub static CLIENTS: &[Client] = &[
    Client {
        id: "c1",
        since: "Since 2019",
        name: "ABC Corporation",
        website_href: "#",
        domain: "Commercial Real Estate",
        category: "Luxury Home Development",
        quote: "Estatein's expertise in finding the perfect office space for our expanding operations was invaluable. They truly understand our business needs.",
    },
    Client {
        id: "c2",
        since: "Since 2018",
        name: "GreenTech Enterprises",
        website_href: "#",
        domain: "Commercial Real Estate",
        category: "Retail Space",
        quote: "Estatein's ability to identify prime retail locations helped us expand our brand presence. They are a trusted partner in our growth.",
    },
    Client {
        id: "c3",
        since: "Since 2020",
        name: "BluePeak Holdings",
        website_href: "#",
        domain: "Corporate Leasing",
        category: "Office Space",
        quote: "From shortlisting to negotiation, the team made the entire process smooth and transparent. We felt supported at every step.",
    },
];
