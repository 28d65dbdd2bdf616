use maud::{html, Markup, DOCTYPE};

use crate::data::site::{
    BANNER_LINK, BANNER_MESSAGE, FOOTER_COLUMNS, NAV_LINKS, SITE_NAME, SOCIAL_LINKS,
};
use crate::templates::components::icons;
use crate::templates::PageCtx;

fn is_active(ctx: &PageCtx, href: &str) -> bool {
    match href {
        "/" => ctx.path == "/",
        _ => ctx.path == href || ctx.path.starts_with(&format!("{href}/")),
    }
}

fn banner() -> Markup {
    html! {
        div class="banner" role="region" aria-label="Announcement" {
            p {
                (BANNER_MESSAGE) " "
                a href=(BANNER_LINK.href) { (BANNER_LINK.label) }
            }
            a class="banner-close" href="/banner/dismiss" aria-label="Dismiss banner" { "×" }
        }
    }
}

fn navbar(ctx: &PageCtx) -> Markup {
    let links = html! {
        ul {
            @for link in NAV_LINKS {
                li {
                    @if is_active(ctx, link.href) {
                        a class="active" href=(link.href) aria-current="page" { (link.label) }
                    } @else {
                        a href=(link.href) { (link.label) }
                    }
                }
            }
        }
    };

    html! {
        header class="navbar" {
            a class="brand" href="/" {
                (icons::logo())
                span { (SITE_NAME) }
            }
            nav class="nav-desktop" aria-label="Main" { (links) }
            a class="btn btn-dark" href="/contact" { "Contact Us" }
            details class="nav-mobile" {
                summary aria-label="Open menu" { (icons::menu()) }
                nav aria-label="Mobile" {
                    (links)
                    a class="btn btn-dark" href="/contact" { "Contact Us" }
                }
            }
        }
    }
}

fn footer(ctx: &PageCtx) -> Markup {
    html! {
        footer class="footer" {
            div class="footer-top" {
                div class="footer-brand" {
                    a class="brand" href="/" {
                        (icons::logo())
                        span { (SITE_NAME) }
                    }
                    form class="subscribe" action="/contact" method="get" {
                        input type="email" name="email" placeholder="Enter Your Email" aria-label="Email";
                        button type="submit" aria-label="Subscribe" { (icons::send()) }
                    }
                }
                @for column in FOOTER_COLUMNS {
                    div class="footer-column" {
                        h4 { (column.title) }
                        ul {
                            @for link in column.links {
                                li { a href=(link.href) { (link.label) } }
                            }
                        }
                    }
                }
            }
            div class="footer-bottom" {
                p { "©" (ctx.year) " " (SITE_NAME) ". All Rights Reserved." }
                a href="#" { "Terms & Conditions" }
                ul class="socials" {
                    @for link in SOCIAL_LINKS {
                        li { a href=(link.href) aria-label=(link.label) { (link.label) } }
                    }
                }
            }
        }
    }
}

pub fn desktop_layout(title: &str, ctx: &PageCtx, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="icon" href="/static/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                @if ctx.show_banner {
                    (banner())
                }
                (navbar(ctx))
                main { (content) }
                (footer(ctx))
            }
        }
    }
}
