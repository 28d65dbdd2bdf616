use maud::{html, Markup};

use crate::data::forms::{FilterSpec, PROPERTY_FILTERS};
use crate::data::PROPERTIES;
use crate::domain::badge::PropertyCard;
use crate::domain::filter::{filter_properties, PropertyQuery};
use crate::domain::pager::Carousel;
use crate::templates::components::{call_to_action, carousel, cards, forms, page_hero, section_header};
use crate::templates::{desktop_layout, PageCtx};

/// Filter dropdown; the empty "any" option stays selectable so a filter can be cleared.
fn filter_select(spec: &FilterSpec, selected: &str) -> Markup {
    html! {
        label class="filter" {
            span class="sr-only" { (spec.label) }
            select name=(spec.key) {
                option value="" selected[selected.is_empty()] { (spec.label) }
                @for o in spec.options {
                    option value=(o.value) selected[o.value == selected] { (o.label) }
                }
            }
        }
    }
}

fn search_form(query: &PropertyQuery) -> Markup {
    html! {
        form class="search" method="get" action="/properties#results" role="search" {
            div class="search-box" {
                input type="search" name="q" value=(query.text) placeholder="Search For A Property" aria-label="Search";
                button class="btn btn-primary" type="submit" { "Find Property" }
            }
            div class="filter-bar" {
                @for spec in PROPERTY_FILTERS {
                    (filter_select(spec, query.filters.get(spec.key)))
                }
            }
            @if query.filters.is_active() || !query.text.is_empty() {
                a class="clear" href="/properties" { "Clear filters" }
            }
        }
    }
}

pub fn properties_page(ctx: &PageCtx) -> Markup {
    let query = PropertyQuery::from_pairs(ctx.query.pairs());
    let matches: Vec<PropertyCard> = filter_properties(PROPERTIES, &query)
        .into_iter()
        .map(PropertyCard::from_property)
        .collect();
    let results = Carousel::at_page(&ctx.viewport, matches.len(), 3, ctx.query.page("page"));

    desktop_layout(
        "Properties",
        ctx,
        html! {
            (page_hero(
                "Find Your Dream Property",
                "Welcome to Estatein, where your dream property awaits in every corner of our beautiful world. Explore our curated selection of properties, each offering a unique story and a chance to redefine your life.",
            ))
            (search_form(&query))

            section id="results" {
                (section_header(
                    "Discover a World of Possibilities",
                    "Our portfolio of properties is as diverse as your dreams. Explore the following categories to find the perfect property that resonates with your vision of home.",
                    None,
                ))
                @if matches.is_empty() {
                    p class="empty-state" { "No properties match your search. Try different filters." }
                } @else {
                    (carousel(ctx, "page", "results", &results, &matches, cards::category_property))
                }
            }

            section id="inquiry" {
                (section_header(
                    "Let's Make it Happen",
                    "Ready to take the first step toward your dream property? Fill out the form below, and our real estate wizards will work their magic to find your perfect match.",
                    None,
                ))
                (forms::property_inquiry_form())
            }

            (call_to_action())
        },
    )
}
