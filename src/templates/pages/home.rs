// templates/pages/home.rs

use maud::{html, Markup};

use crate::data::company::HERO_STATS;
use crate::data::{FAQS, PROPERTIES, TESTIMONIALS};
use crate::domain::pager::Carousel;
use crate::templates::components::{
    call_to_action, carousel, cards, feature_strip, section_header, stats,
};
use crate::templates::{desktop_layout, PageCtx};

pub fn home_page(ctx: &PageCtx) -> Markup {
    let q = &ctx.query;
    let featured = Carousel::at_page(&ctx.viewport, PROPERTIES.len(), 3, q.page("featured"));
    let testimonials = Carousel::at_page(&ctx.viewport, TESTIMONIALS.len(), 3, q.page("testimonials"));
    let faqs = Carousel::at_page(&ctx.viewport, FAQS.len(), 3, q.page("faq"));

    desktop_layout(
        "Home",
        ctx,
        html! {
            section class="hero" {
                div class="hero-copy" {
                    h1 { "Discover Your Dream Property with Estatein" }
                    p {
                        "Your journey to finding the perfect property begins here. "
                        "Explore our listings to find the home that matches your dreams."
                    }
                    div class="hero-actions" {
                        a class="btn btn-outline" href="/about" { "Learn More" }
                        a class="btn btn-primary" href="/properties" { "Browse Properties" }
                    }
                    (stats(&HERO_STATS))
                }
                img class="hero-image" src="/static/hero.png" alt="City skyline";
            }

            (feature_strip())

            section id="featured" {
                (section_header(
                    "Featured Properties",
                    "Explore our handpicked selection of featured properties. Each listing offers a glimpse into exceptional homes and investments available through Estatein.",
                    Some(("View All Properties", "/properties")),
                ))
                (carousel(ctx, "featured", "featured", &featured, PROPERTIES, cards::featured_property))
            }

            section id="testimonials" {
                (section_header(
                    "What Our Clients Say",
                    "Read the success stories and heartfelt testimonials from our valued clients. Discover why they chose Estatein for their real estate needs.",
                    Some(("View All Testimonials", "/#testimonials")),
                ))
                (carousel(ctx, "testimonials", "testimonials", &testimonials, TESTIMONIALS, cards::testimonial))
            }

            section id="faqs" {
                (section_header(
                    "Frequently Asked Questions",
                    "Find answers to common questions about Estatein's services, property listings, and the real estate process.",
                    Some(("View All FAQ's", "/contact")),
                ))
                (carousel(ctx, "faq", "faqs", &faqs, FAQS, cards::faq))
            }

            (call_to_action())
        },
    )
}
