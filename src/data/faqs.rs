use crate::domain::listing::Faq;

pub static FAQS: &[Faq] = &[
    Faq {
        id: "f1",
        question: "How do I search for properties on Estatein?",
        answer_preview: "Learn how to use our user-friendly search tools to find properties that match your criteria.",
        href: "/properties",
    },
    Faq {
        id: "f2",
        question: "What documents do I need to sell my property through Estatein?",
        answer_preview: "Find out about the necessary documentation for listing your property with us.",
        href: "/contact",
    },
    Faq {
        id: "f3",
        question: "How can I contact an Estatein agent?",
        answer_preview: "Discover the different ways you can get in touch with our experienced agents.",
        href: "/contact",
    },
    Faq {
        id: "f4",
        question: "How long does the buying process take?",
        answer_preview: "Get a general idea of timelines and what factors can speed up or slow down the process.",
        href: "/about#how-it-works",
    },
];
