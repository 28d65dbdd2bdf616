//! Inline SVG icons.

use maud::{html, Markup};

use crate::domain::listing::AmenityIcon;

fn svg(paths: &[&str]) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        {
            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
            @for d in paths {
                path d=(d) {}
            }
        }
    }
}

pub fn logo() -> Markup {
    html! {
        svg class="logo" xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="#703bf7" aria-hidden="true" {
            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
        }
    }
}

pub fn menu() -> Markup {
    svg(&["M4 6l16 0", "M4 12l16 0", "M4 18l16 0"])
}

pub fn send() -> Markup {
    svg(&["M10 14l11 -11", "M21 3l-6.5 18a.55 .55 0 0 1 -1 0l-3.5 -7l-7 -3.5a.55 .55 0 0 1 0 -1l18 -6.5"])
}

pub fn arrow_left() -> Markup {
    svg(&["M5 12l14 0", "M5 12l6 6", "M5 12l6 -6"])
}

pub fn arrow_right() -> Markup {
    svg(&["M5 12l14 0", "M13 18l6 -6", "M13 6l6 6"])
}

pub fn arrow_up_right() -> Markup {
    svg(&["M17 7l-10 10", "M8 7l9 0l0 9"])
}

pub fn star() -> Markup {
    html! {
        svg class="star" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="#ffe500" aria-hidden="true" {
            path d="M12 17.75l-6.172 3.245l1.179 -6.873l-5 -4.867l6.9 -1l3.086 -6.253l3.086 6.253l6.9 1l-5 4.867l1.179 6.873z" {}
        }
    }
}

pub fn mail() -> Markup {
    svg(&["M3 7a2 2 0 0 1 2 -2h14a2 2 0 0 1 2 2v10a2 2 0 0 1 -2 2h-14a2 2 0 0 1 -2 -2v-10z", "M3 7l9 6l9 -6"])
}

pub fn phone() -> Markup {
    svg(&["M5 4h4l2 5l-2.5 1.5a11 11 0 0 0 5 5l1.5 -2.5l5 2v4a2 2 0 0 1 -2 2a16 16 0 0 1 -15 -15a2 2 0 0 1 2 -2"])
}

pub fn pin() -> Markup {
    svg(&["M9 11a3 3 0 1 0 6 0a3 3 0 0 0 -6 0", "M17.657 16.657l-4.243 4.243a2 2 0 0 1 -2.827 0l-4.244 -4.243a8 8 0 1 1 11.314 0z"])
}

pub fn amenity(icon: AmenityIcon) -> Markup {
    match icon {
        AmenityIcon::Bedroom => svg(&["M7 9m-2 0a2 2 0 1 0 4 0a2 2 0 1 0 -4 0", "M22 17v-3h-20", "M2 8v9", "M12 14h10v-2a3 3 0 0 0 -3 -3h-7v5z"]),
        AmenityIcon::Bathroom => svg(&["M4 12h16a1 1 0 0 1 1 1v3a4 4 0 0 1 -4 4h-10a4 4 0 0 1 -4 -4v-3a1 1 0 0 1 1 -1z", "M6 12v-7a2 2 0 0 1 2 -2h3v2.25", "M4 21l1 -1.5", "M20 21l-1 -1.5"]),
        AmenityIcon::Kind => svg(&["M5 12l-2 0l9 -9l9 9l-2 0", "M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7"]),
    }
}
