use maud::{html, Markup};

use crate::data::company::{Client, TextCard};
use crate::domain::badge::PropertyCard;
use crate::domain::listing::{Faq, Office, Property, TeamMember, Testimonial};
use crate::templates::components::icons;

/// Home page card: amenities plus an expandable description.
pub fn featured_property(p: &Property) -> Markup {
    html! {
        article class="card property-card" {
            img src=(p.image_src) alt=(p.alt_text()) loading="lazy";
            h3 { (p.title) }
            details class="read-more" {
                summary {
                    (p.excerpt) " "
                    span class="more" { "Read More" }
                }
                p { (p.description) }
            }
            ul class="amenities" {
                @for amenity in p.amenities {
                    li { (icons::amenity(amenity.icon)) (amenity.label) }
                }
            }
            div class="card-footer" {
                div class="price" {
                    span { "Price" }
                    strong { (p.price) }
                }
                a class="btn btn-primary" href=(p.href()) { "View Property Details" }
            }
        }
    }
}

/// Properties page card with the category badge.
pub fn category_property(card: &PropertyCard) -> Markup {
    html! {
        article class="card property-card" {
            img src=(card.image_src) alt=(card.image_alt) loading="lazy";
            span class="badge" { (card.badge) }
            h3 { (card.title) }
            p { (card.description) }
            p class="location" { (icons::pin()) (card.location) }
            div class="card-footer" {
                div class="price" {
                    span { "Price" }
                    strong { (card.price) }
                }
                a class="btn btn-primary" href=(card.href) { (card.cta_text) }
            }
        }
    }
}

pub fn testimonial(t: &Testimonial) -> Markup {
    html! {
        article class="card testimonial" {
            div class="rating" aria-label=(format!("{} out of 5 stars", t.rating)) {
                @for _ in 0..t.rating {
                    (icons::star())
                }
            }
            h3 { (t.title) }
            p { (t.message) }
            div class="person" {
                img src=(t.avatar_src) alt=(t.name) width="48" height="48";
                div {
                    strong { (t.name) }
                    span { (t.location) }
                }
            }
        }
    }
}

pub fn faq(f: &Faq) -> Markup {
    html! {
        article class="card faq" {
            h3 { (f.question) }
            p { (f.answer_preview) }
            a class="btn btn-outline" href=(f.href) { "Read More" }
        }
    }
}

pub fn office(o: &Office) -> Markup {
    html! {
        article class="card office" {
            span class="muted" { (o.badge) }
            h3 { (o.title) }
            p { (o.description) }
            ul class="chips" {
                li { (icons::mail()) a href=(format!("mailto:{}", o.email)) { (o.email) } }
                li { (icons::phone()) (o.phone) }
                li { (icons::pin()) (o.location_tag) }
            }
            a class="btn btn-primary" href=(o.direction_href) { "Get Direction" }
        }
    }
}

pub fn team_member(m: &TeamMember) -> Markup {
    html! {
        article class="card team" {
            img src=(m.image_src) alt=(m.name) loading="lazy";
            h3 { (m.name) }
            p class="muted" { (m.role) }
            a class="btn btn-dark" href="/contact" { "Say Hello 👋" }
        }
    }
}

pub fn client(c: &Client) -> Markup {
    html! {
        article class="card client" {
            span class="muted" { (c.since) }
            h3 { (c.name) }
            a class="btn btn-outline" href=(c.website_href) { "Visit Website" }
            dl {
                div { dt { "Domain" } dd { (c.domain) } }
                div { dt { "Category" } dd { (c.category) } }
            }
            blockquote {
                span class="muted" { "What They Said 🤗" }
                p { (c.quote) }
            }
        }
    }
}

pub fn text_card(card: &TextCard) -> Markup {
    html! {
        article class="card text-card" {
            h3 { (card.title) }
            p { (card.description) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PROPERTIES, TESTIMONIALS};

    #[test]
    fn featured_card_links_to_details() {
        let html = featured_property(&PROPERTIES[0]).into_string();
        assert!(html.contains(r#"href="/properties/seaside-serenity-villa""#));
        assert!(html.contains("4-Bedroom"));
        assert!(html.contains("<details"));
    }

    #[test]
    fn category_card_shows_badge() {
        let card = PropertyCard::from_property(&PROPERTIES[1]);
        let html = category_property(&card).into_string();
        assert!(html.contains("Urban Oasis"));
    }

    #[test]
    fn testimonial_draws_one_star_per_point() {
        let html = testimonial(&TESTIMONIALS[0]).into_string();
        assert_eq!(html.matches(r#"class="star""#).count(), TESTIMONIALS[0].rating as usize);
    }
}
