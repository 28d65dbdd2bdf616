use maud::{html, Markup};

use crate::data::company::Stat;
use crate::data::services::FEATURE_STRIP;
use crate::templates::components::icons;

pub fn section_header(title: &str, subtitle: &str, cta: Option<(&str, &str)>) -> Markup {
    html! {
        div class="section-header" {
            div {
                h2 { (title) }
                p { (subtitle) }
            }
            @if let Some((label, href)) = cta {
                a class="btn btn-outline" href=(href) { (label) }
            }
        }
    }
}

pub fn page_hero(title: &str, subtitle: &str) -> Markup {
    html! {
        section class="page-hero" {
            h1 { (title) }
            p { (subtitle) }
        }
    }
}

pub fn stats(items: &[Stat]) -> Markup {
    html! {
        ul class="stats" {
            @for stat in items {
                li {
                    strong { (stat.value) }
                    span { (stat.label) }
                }
            }
        }
    }
}

pub fn feature_strip() -> Markup {
    html! {
        section id="features" class="feature-strip" {
            @for feature in FEATURE_STRIP {
                a class="feature" href=(feature.href) {
                    span class="feature-arrow" { (icons::arrow_up_right()) }
                    p { (feature.title) }
                }
            }
        }
    }
}

pub fn call_to_action() -> Markup {
    html! {
        section class="cta" {
            div {
                h2 { "Start Your Real Estate Journey Today" }
                p {
                    "Your dream property is just a click away. Whether you're looking for a new home, "
                    "a strategic investment, or expert real estate advice, Estatein is here to assist "
                    "you every step of the way. Take the first step towards your real estate goals and "
                    "explore our available properties or get in touch with our team for personalized assistance."
                }
            }
            a class="btn btn-primary" href="/properties" { "Explore Properties" }
        }
    }
}
