use maud::{html, Markup, DOCTYPE};

use crate::data::site::SITE_NAME;

/// Standalone error page; it does not depend on request state.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Error " (status) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                main {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
