use maud::{html, Markup};

use crate::data::services::SERVICE_GROUPS;
use crate::templates::components::{call_to_action, cards, feature_strip, page_hero, section_header};
use crate::templates::{desktop_layout, PageCtx};

pub fn services_page(ctx: &PageCtx) -> Markup {
    desktop_layout(
        "Services",
        ctx,
        html! {
            (page_hero(
                "Elevate Your Real Estate Experience",
                "Welcome to Estatein, where your real estate aspirations meet expert guidance. Explore our comprehensive range of services, each designed to cater to your unique needs and dreams.",
            ))
            (feature_strip())

            @for group in SERVICE_GROUPS {
                section id=(group.anchor) {
                    (section_header(group.title, group.subtitle, None))
                    div class="grid cols-3" {
                        @for card in group.cards {
                            (cards::text_card(card))
                        }
                        article class="card cta-card" {
                            h3 { (group.cta_title) }
                            p { (group.cta_subtitle) }
                            a class="btn btn-dark" href="/properties" { "Learn More" }
                        }
                    }
                }
            }

            (call_to_action())
        },
    )
}
