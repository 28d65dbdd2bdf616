use maud::{html, Markup};

use crate::templates::components::call_to_action;
use crate::templates::{desktop_layout, PageCtx};

/// Shown after any inquiry form is accepted.
pub fn thanks_page(ctx: &PageCtx, first_name: &str, topic: &str) -> Markup {
    desktop_layout(
        "Thank You",
        ctx,
        html! {
            section class="page-hero thanks" {
                h1 { "Thank you, " (first_name) "!" }
                p { "We received your message about " (topic) ". A member of our team will be in touch shortly." }
                a class="btn btn-primary" href="/properties" { "Keep Browsing" }
            }
            (call_to_action())
        },
    )
}
