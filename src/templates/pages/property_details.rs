use maud::{html, Markup};

use crate::data::services::{PricingRow, KEY_FEATURES, PRICING_GROUPS, PRICING_NOTE};
use crate::data::FAQS;
use crate::domain::gallery::PairGallery;
use crate::domain::listing::Property;
use crate::domain::pager::Carousel;
use crate::templates::components::{call_to_action, carousel, cards, forms, icons, section_header};
use crate::templates::{desktop_layout, PageCtx};

/// Two images side by side, thumbnails, and prev/next links. `img` is 1-based.
fn gallery(ctx: &PageCtx, p: &Property) -> Markup {
    let selected = ctx.query.page("img").unwrap_or(1).saturating_sub(1);
    let g = PairGallery::new(p.images.len(), selected);
    let link = |index: usize| format!("{}#gallery", ctx.href_with("img", &(index + 1).to_string()));

    let mut prev = g;
    prev.prev();
    let mut next = g;
    next.next();

    html! {
        div id="gallery" class="gallery" {
            ul class="thumbnails" {
                @for (i, src) in p.images.iter().enumerate() {
                    li {
                        a class=[g.is_visible(i).then_some("active")] href=(link(i)) {
                            img src=(src) alt=(format!("{} thumbnail {}", p.title, i + 1)) loading="lazy";
                        }
                    }
                }
            }
            div class="gallery-main" {
                @if g.is_empty() {
                    p class="muted" { "No images available." }
                } @else {
                    img src=(p.images[g.left()]) alt=(p.alt_text());
                    @if g.right() != g.left() {
                        img src=(p.images[g.right()]) alt=(p.alt_text());
                    }
                }
            }
            nav class="gallery-nav" aria-label="Gallery" {
                @if g.can_prev() {
                    a class="arrow" href=(link(prev.left())) rel="prev" aria-label="Previous images" { (icons::arrow_left()) }
                } @else {
                    span class="arrow disabled" aria-disabled="true" { (icons::arrow_left()) }
                }
                ol class="dots" {
                    @for dot in 0..g.total_dots() {
                        li class=[(dot == g.active_dot()).then_some("active")] {}
                    }
                }
                @if g.can_next() {
                    a class="arrow" href=(link(next.left())) rel="next" aria-label="Next images" { (icons::arrow_right()) }
                } @else {
                    span class="arrow disabled" aria-disabled="true" { (icons::arrow_right()) }
                }
            }
        }
    }
}

fn info(p: &Property) -> Markup {
    html! {
        section id="info" class="split" {
            div class="card" {
                h3 { "Description" }
                p { (p.description) }
                ul class="info-stats" {
                    @for amenity in p.amenities {
                        li { (icons::amenity(amenity.icon)) (amenity.label) }
                    }
                    li { (format!("{} Square Feet", p.size_sqft)) }
                    li { "Built " (p.year_built) }
                }
            }
            div class="card" {
                h3 { "Key Features and Amenities" }
                ul class="features" {
                    @for feature in KEY_FEATURES {
                        li { (feature) }
                    }
                }
            }
        }
    }
}

fn pricing_row(row: &PricingRow) -> Markup {
    html! {
        div class="pricing-row" {
            dt { (row.label) }
            dd {
                strong { (row.value) }
                @if let Some(note) = row.note {
                    small { (note) }
                }
            }
        }
    }
}

fn pricing(p: &Property) -> Markup {
    let listing = PricingRow {
        label: "Listing Price",
        value: p.price,
        note: None,
    };

    html! {
        section id="pricing" {
            (section_header(
                &format!("Comprehensive Pricing Details for {}", p.title),
                "At Estatein, transparency is key. We want you to have a clear understanding of all costs associated with your property investment.",
                None,
            ))
            p class="note" { (PRICING_NOTE) }
            div class="pricing" {
                div class="listing-price" {
                    span { "Listing Price" }
                    strong { (p.price) }
                }
                div class="card" {
                    h3 { "Total Initial Costs" }
                    dl { (pricing_row(&listing)) }
                }
                @for group in PRICING_GROUPS {
                    div class="card" {
                        h3 { (group.title) }
                        dl {
                            @for row in group.rows {
                                (pricing_row(row))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn property_details_page(ctx: &PageCtx, p: &Property) -> Markup {
    let faqs = Carousel::at_page(&ctx.viewport, FAQS.len(), 3, ctx.query.page("faq"));

    desktop_layout(
        p.title,
        ctx,
        html! {
            section class="details-hero" {
                div class="details-title" {
                    h1 { (p.title) }
                    span class="location" { (icons::pin()) (p.location) }
                    div class="price" {
                        span { "Price" }
                        strong { (p.price) }
                    }
                }
                (gallery(ctx, p))
            }

            (info(p))

            section id="inquiry" {
                (section_header(
                    &format!("Inquire About {}", p.title),
                    "Interested in this property? Fill out the form below, and our real estate experts will get back to you with more details, including scheduling a viewing and answering any questions you may have.",
                    None,
                ))
                (forms::details_inquiry_form(p))
            }

            (pricing(p))

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::find_property;
    use crate::request::Query;

    fn render(id: &str, query: &str) -> String {
        let p = find_property(id).unwrap();
        let ctx = PageCtx::new(p.href(), Query::parse(query), 1280);
        property_details_page(&ctx, p).into_string()
    }

    #[test]
    fn first_pair_is_shown_by_default() {
        let html = render("metropolitan-haven", "");
        assert!(html.contains(r#"<div class="gallery-main"><img src="/static/properties/pd-2.png""#));
        assert!(html.contains(
            r#"href="/properties/metropolitan-haven?img=2#gallery" rel="next" aria-label="Next images""#
        ));
        assert!(!html.contains("Previous images"));
    }

    #[test]
    fn last_pair_disables_next() {
        let html = render("metropolitan-haven", "img=3");
        assert!(html.contains(
            r#"href="/properties/metropolitan-haven?img=2#gallery" rel="prev" aria-label="Previous images""#
        ));
        assert!(!html.contains("Next images"));
    }

    #[test]
    fn pricing_uses_listing_price() {
        let html = render("rustic-retreat-cottage", "");
        assert!(html.contains("Total Initial Costs"));
        assert!(html.contains("$350,000"));
        assert!(html.contains(r#"value="rustic-retreat-cottage""#));
    }
}
