use maud::{html, Markup};

use crate::data::company::{ACHIEVEMENTS, CLIENTS, EXPERIENCE_STEPS, HERO_STATS, STORY, TEAM, VALUES};
use crate::domain::pager::Carousel;
use crate::domain::viewport::SizePolicy;
use crate::templates::components::{call_to_action, carousel, cards, section_header, stats};
use crate::templates::{desktop_layout, PageCtx};

pub fn about_page(ctx: &PageCtx) -> Markup {
    // Two per page on anything wider than a phone.
    let clients = Carousel::at_page_with(
        &ctx.viewport,
        CLIENTS.len(),
        SizePolicy::small_only(2),
        ctx.query.page("clients"),
    );

    desktop_layout(
        "About",
        ctx,
        html! {
            section class="hero" {
                div class="hero-copy" {
                    h1 { "Our Journey" }
                    p { (STORY) }
                    (stats(&HERO_STATS))
                }
                img class="hero-image" src="/static/about.png" alt="Our office";
            }

            section id="values" class="split" {
                div {
                    h2 { "Our Values" }
                    p { "Our story is one of continuous growth and evolution. We started as a small team with big dreams." }
                }
                div class="grid cols-2" {
                    @for card in VALUES {
                        (cards::text_card(card))
                    }
                }
            }

            section id="works" {
                (section_header(
                    "Our Achievements",
                    "Our story is one of continuous growth and evolution. We started as a small team with big dreams.",
                    None,
                ))
                div class="grid cols-3" {
                    @for card in ACHIEVEMENTS {
                        (cards::text_card(card))
                    }
                }
            }

            section id="how-it-works" {
                (section_header(
                    "Navigating the Estatein Experience",
                    "At Estatein, we've designed a straightforward process to help you find and purchase your dream property with ease.",
                    None,
                ))
                ol class="grid cols-3 steps" {
                    @for (i, step) in EXPERIENCE_STEPS.iter().enumerate() {
                        li {
                            span class="step" { (format!("Step {:02}", i + 1)) }
                            (cards::text_card(step))
                        }
                    }
                }
            }

            section id="team" {
                (section_header(
                    "Meet the Estatein Team",
                    "At Estatein, our success is driven by the dedication and expertise of our team.",
                    None,
                ))
                div class="grid cols-4" {
                    @for member in TEAM {
                        (cards::team_member(member))
                    }
                }
            }

            section id="clients" {
                (section_header(
                    "Our Valued Clients",
                    "At Estatein, we have had the privilege of working with a diverse range of clients across various industries.",
                    None,
                ))
                (carousel(ctx, "clients", "clients", &clients, CLIENTS, cards::client))
            }

            (call_to_action())
        },
    )
}
