use maud::{html, Markup};

use crate::domain::pager::{Carousel, Pager};
use crate::templates::components::icons;
use crate::templates::PageCtx;

/// "01 of 05" with previous/next links that rewrite only `key` in the URL.
///
/// The URL carries 1-based page numbers.
pub fn carousel_nav(ctx: &PageCtx, key: &str, anchor: &str, pager: &Pager) -> Markup {
    let link = |page: usize| format!("{}#{}", ctx.href_with(key, &(page + 1).to_string()), anchor);

    html! {
        nav class="carousel-nav" aria-label="Pagination" {
            span class="page-label" { (pager.page_label()) }
            div class="carousel-arrows" {
                @if pager.has_prev() {
                    a class="arrow" href=(link(pager.page() - 1)) rel="prev" aria-label="Previous page" { (icons::arrow_left()) }
                } @else {
                    span class="arrow disabled" aria-disabled="true" { (icons::arrow_left()) }
                }
                @if pager.has_next() {
                    a class="arrow" href=(link(pager.page() + 1)) rel="next" aria-label="Next page" { (icons::arrow_right()) }
                } @else {
                    span class="arrow disabled" aria-disabled="true" { (icons::arrow_right()) }
                }
            }
        }
    }
}

/// Grid of the visible slice followed by the pager controls.
pub fn carousel<T>(
    ctx: &PageCtx,
    key: &str,
    anchor: &str,
    carousel: &Carousel,
    items: &[T],
    render: impl Fn(&T) -> Markup,
) -> Markup {
    let pager = carousel.pager();

    html! {
        div class=(format!("carousel-grid cols-{}", pager.page_size())) {
            @for item in pager.slice(items) {
                (render(item))
            }
        }
        (carousel_nav(ctx, key, anchor, &pager))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Query;

    #[test]
    fn nav_disables_edges_and_keeps_other_params() {
        let ctx = PageCtx::new("/", Query::parse("faq=2&featured=1"), 1280);
        let mut pager = Pager::new(5, 3);
        pager.set_page(0);

        let first = carousel_nav(&ctx, "featured", "featured", &pager).into_string();
        assert!(first.contains("01 of 02"));
        assert!(first.contains(r#"href="/?faq=2&amp;featured=2#featured""#));
        assert!(first.contains("arrow disabled"));

        pager.go_next();
        let last = carousel_nav(&ctx, "featured", "featured", &pager).into_string();
        assert!(last.contains("02 of 02"));
        assert!(last.contains(r#"rel="prev""#));
        assert!(!last.contains(r#"rel="next""#));
    }

    #[test]
    fn grid_renders_the_visible_slice() {
        let ctx = PageCtx::new("/", Query::default(), 375);
        let items = ["a", "b", "c"];
        let c = Carousel::at_page(&ctx.viewport, items.len(), 3, Some(2));
        let html = carousel(&ctx, "page", "list", &c, &items, |s| html! { i { (s) } }).into_string();
        assert!(html.contains("cols-1"));
        assert!(html.contains("<i>b</i>"));
        assert!(!html.contains("<i>a</i>"));
    }
}
