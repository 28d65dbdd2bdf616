use maud::{html, Markup};

use crate::data::OFFICES;
use crate::domain::filter::{filter_offices, OfficeCategory};
use crate::templates::components::{call_to_action, cards, feature_strip, forms, page_hero, section_header};
use crate::templates::{desktop_layout, PageCtx};

fn office_tabs(ctx: &PageCtx, active: OfficeCategory) -> Markup {
    html! {
        nav class="tabs" aria-label="Office regions" {
            @for tab in OfficeCategory::TABS {
                @let href = format!("{}#offices", ctx.href_with("office", tab.slug()));
                @if tab == active {
                    a class="tab active" href=(href) aria-current="true" { (tab.label()) }
                } @else {
                    a class="tab" href=(href) { (tab.label()) }
                }
            }
        }
    }
}

pub fn contact_page(ctx: &PageCtx) -> Markup {
    let active = OfficeCategory::from_slug(ctx.query.get("office").unwrap_or(""));
    let offices = filter_offices(OFFICES, active);

    desktop_layout(
        "Contact",
        ctx,
        html! {
            (page_hero(
                "Get in Touch with Estatein",
                "Welcome to Estatein's Contact Us page. We're here to assist you with any inquiries, requests, or feedback you may have.",
            ))
            (feature_strip())

            section id="contact-form" {
                (section_header(
                    "Let's Connect",
                    "We're excited to connect with you and learn more about your real estate goals. Use the form below to get in touch with Estatein.",
                    None,
                ))
                (forms::contact_form())
            }

            section id="offices" {
                (section_header(
                    "Discover Our Office Locations",
                    "Estatein is here to serve you across multiple locations. Whether you're looking to meet our team, discuss real estate opportunities, or simply drop by for a chat, we have offices conveniently located to serve your needs.",
                    None,
                ))
                (office_tabs(ctx, active))
                div class="grid cols-2" {
                    @for office in &offices {
                        (cards::office(office))
                    }
                }
            }

            section id="explore" class="gallery-strip" {
                div class="grid cols-4" {
                    @for n in 1..=4 {
                        img src=(format!("/static/explore/explore-{n}.png")) alt="" loading="lazy";
                    }
                }
                (section_header(
                    "Explore Estatein's World",
                    "Step inside the world of Estatein, where professionalism meets warmth, and expertise meets passion. Our gallery offers a glimpse into our team and workspaces, inviting you to get to know us better.",
                    None,
                ))
            }

            (call_to_action())
        },
    )
}
